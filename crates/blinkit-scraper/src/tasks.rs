use blinkit_core::{Category, Location, Task};

/// Builds one [`Task`] per (location, category) pair.
///
/// Locations form the outer loop and categories the inner loop, so the
/// result is `locations.len() * categories.len()` tasks in a reproducible
/// order. Either input being empty yields no tasks.
#[must_use]
pub fn generate_tasks(locations: &[Location], categories: &[Category]) -> Vec<Task> {
    locations
        .iter()
        .flat_map(|location| {
            categories.iter().map(move |category| Task {
                location: location.clone(),
                category: category.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locations(n: usize) -> Vec<Location> {
        (0..n)
            .map(|i| Location {
                latitude: format!("28.{i}"),
                longitude: format!("77.{i}"),
            })
            .collect()
    }

    fn categories(n: usize) -> Vec<Category> {
        (0..n)
            .map(|i| Category {
                l1_category: format!("L1-{i}"),
                l1_category_id: format!("{}", 100 + i),
                l2_category: format!("L2-{i}"),
                l2_category_id: format!("{}", 900 + i),
            })
            .collect()
    }

    #[test]
    fn produces_m_times_n_tasks() {
        for (m, n) in [(1, 1), (2, 3), (3, 2), (4, 5)] {
            assert_eq!(
                generate_tasks(&locations(m), &categories(n)).len(),
                m * n,
                "expected {m}x{n} tasks"
            );
        }
    }

    #[test]
    fn locations_are_the_outer_loop() {
        let locs = locations(2);
        let cats = categories(3);
        let tasks = generate_tasks(&locs, &cats);

        let pairs: Vec<(&str, &str)> = tasks
            .iter()
            .map(|t| {
                (
                    t.location.latitude.as_str(),
                    t.category.l2_category_id.as_str(),
                )
            })
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("28.0", "900"),
                ("28.0", "901"),
                ("28.0", "902"),
                ("28.1", "900"),
                ("28.1", "901"),
                ("28.1", "902"),
            ]
        );
    }

    #[test]
    fn output_is_deterministic() {
        let locs = locations(3);
        let cats = categories(4);
        assert_eq!(generate_tasks(&locs, &cats), generate_tasks(&locs, &cats));
    }

    #[test]
    fn empty_locations_yield_no_tasks() {
        assert!(generate_tasks(&[], &categories(3)).is_empty());
    }

    #[test]
    fn empty_categories_yield_no_tasks() {
        assert!(generate_tasks(&locations(3), &[]).is_empty());
    }
}
