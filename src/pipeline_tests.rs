#[cfg(test)]
mod tests {
    use crate::cluster::{Cluster, Kmeans, Point, Termination};
    use crate::error::Error;
    use crate::metrics;

    /// Two well-separated triangles of three points each.
    fn two_triangles() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 11.0),
            Point::new(11.0, 10.0),
        ]
    }

    fn scattered(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| Point::new((i as f64 * 0.37).sin().abs(), (i as f64 * 0.73).cos().abs()))
            .collect()
    }

    #[test]
    fn test_two_triangles_split_cleanly() {
        let points = two_triangles();
        let fit = Kmeans::new(2).with_seed(7).with_threads(1).fit(&points).unwrap();

        // Both clusters end with exactly 3 points.
        let mut sizes: Vec<usize> = fit.clusters.iter().map(Cluster::len).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![3, 3]);

        // Centroids land on the triangle means, (1/3, 1/3) and (31/3, 31/3).
        let near_id = fit.points[0].cluster.unwrap();
        let far_id = fit.points[3].cluster.unwrap();
        assert_ne!(near_id, far_id);

        let near = fit.clusters.get(near_id).unwrap().centroid();
        let far = fit.clusters.get(far_id).unwrap().centroid();
        assert!((near.x - 1.0 / 3.0).abs() < 1e-9);
        assert!((near.y - 1.0 / 3.0).abs() < 1e-9);
        assert!((far.x - 31.0 / 3.0).abs() < 1e-9);
        assert!((far.y - 31.0 / 3.0).abs() < 1e-9);

        let quality = metrics::silhouette(&fit.points, &fit.clusters, 1).unwrap();
        assert!(quality.mean > 0.9, "got {}", quality.mean);
    }

    #[test]
    fn test_single_cluster_holds_everything_but_cannot_be_scored() {
        let points = two_triangles();
        let fit = Kmeans::new(1).with_seed(3).fit(&points).unwrap();

        assert_eq!(fit.clusters.len(), 1);
        assert_eq!(fit.clusters.get(1).unwrap().len(), points.len());

        let result = metrics::silhouette(&fit.points, &fit.clusters, 1);
        assert_eq!(result.unwrap_err(), Error::EmptyClusterSet);
    }

    #[test]
    fn test_one_cluster_per_point_scores_exactly_one() {
        let points = two_triangles();
        let fit = Kmeans::new(points.len()).with_seed(11).fit(&points).unwrap();

        for cluster in fit.clusters.iter() {
            assert_eq!(cluster.len(), 1);
        }

        let quality = metrics::silhouette(&fit.points, &fit.clusters, 1).unwrap();
        assert!((quality.mean - 1.0).abs() < 1e-12);
        for &s in &quality.values {
            assert!((s - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_assignment_totality_and_membership() {
        let points = scattered(80);
        let fit = Kmeans::new(5).with_seed(19).with_threads(3).fit(&points).unwrap();

        // Every point carries an id in 1..=K.
        for point in &fit.points {
            let id = point.cluster.unwrap();
            assert!((1..=5).contains(&id));
        }

        // Member lists carry each point exactly once: the coordinate
        // multiset over all clusters matches the input.
        let mut from_members: Vec<(u64, u64)> = fit
            .clusters
            .iter()
            .flat_map(|c| c.members().iter().map(|p| (p.x.to_bits(), p.y.to_bits())))
            .collect();
        let mut from_input: Vec<(u64, u64)> = points
            .iter()
            .map(|p| (p.x.to_bits(), p.y.to_bits()))
            .collect();
        from_members.sort_unstable();
        from_input.sort_unstable();
        assert_eq!(from_members, from_input);

        // And each member agrees with the cluster holding it.
        for cluster in fit.clusters.iter() {
            for member in cluster.members() {
                assert_eq!(member.cluster, Some(cluster.id()));
            }
        }
    }

    #[test]
    fn test_centroid_is_mean_of_members() {
        let points = scattered(64);
        let fit = Kmeans::new(4).with_seed(23).with_threads(2).fit(&points).unwrap();

        for cluster in fit.clusters.iter() {
            if cluster.is_empty() {
                continue;
            }
            let n = cluster.len() as f64;
            let mx: f64 = cluster.members().iter().map(|p| p.x).sum::<f64>() / n;
            let my: f64 = cluster.members().iter().map(|p| p.y).sum::<f64>() / n;
            assert!((cluster.centroid().x - mx).abs() < 1e-9);
            assert!((cluster.centroid().y - my).abs() < 1e-9);
        }
    }

    #[test]
    fn test_full_pipeline_thread_count_equivalence() {
        let points = scattered(120);

        let run = |threads: usize| {
            let fit = Kmeans::new(6)
                .with_seed(31)
                .with_threads(threads)
                .fit(&points)
                .unwrap();
            let quality = metrics::silhouette(&fit.points, &fit.clusters, threads).unwrap();
            (fit, quality)
        };

        let (fit1, quality1) = run(1);
        let (fit4, quality4) = run(4);

        assert_eq!(fit1.rounds, fit4.rounds);
        assert_eq!(fit1.termination, fit4.termination);
        for (a, b) in fit1.points.iter().zip(fit4.points.iter()) {
            assert_eq!(a.cluster, b.cluster);
        }
        for (a, b) in fit1.clusters.iter().zip(fit4.clusters.iter()) {
            assert_eq!(a.id(), b.id());
            assert_eq!(a.len(), b.len());
            assert!((a.centroid().x - b.centroid().x).abs() < 1e-12);
            assert!((a.centroid().y - b.centroid().y).abs() < 1e-12);
        }
        assert_eq!(quality1.values, quality4.values);
        assert!((quality1.mean - quality4.mean).abs() < 1e-15);
    }

    #[test]
    fn test_terminates_within_round_cap() {
        for seed in 0..8 {
            let fit = Kmeans::new(7)
                .with_seed(seed)
                .with_round_cap(10)
                .fit(&scattered(90))
                .unwrap();
            assert!(fit.rounds <= 10);
            match fit.termination {
                Termination::Converged => assert!(fit.rounds <= 10),
                Termination::RoundCapReached => assert_eq!(fit.rounds, 10),
            }
        }
    }

    #[test]
    fn test_wcss_never_exceeds_total_scatter() {
        // Within-cluster SS of any partition with centroids at member
        // means is bounded by the total SS around the grand mean, which
        // is exactly the K = 1 objective.
        let points = scattered(100);
        let single = Kmeans::new(1).with_seed(41).fit(&points).unwrap();
        let split = Kmeans::new(10).with_seed(41).fit(&points).unwrap();
        assert!(metrics::wcss(&split.clusters) <= metrics::wcss(&single.clusters));
    }
}
