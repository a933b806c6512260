use proptest::prelude::*;
use rowmap::driver::ValueRows;
use rowmap::map::{IntoDestination, ResultMapper};
use rowmap::schema::resolve_column_name;
use rowmap::{Record, Value};

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Profile {
    id: i64,
    user_name: String,
    age: u32,
    active: bool,
}

fn expected() -> Vec<(&'static str, Value)> {
    vec![
        ("id", Value::I64(42)),
        ("user_name", Value::from("alice")),
        ("age", Value::I64(31)),
        ("active", Value::Bool(true)),
    ]
}

fn map(pairs: Vec<(String, Value)>) -> Profile {
    let (columns, values): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
    let mut rows = ValueRows::new(columns, vec![values]);

    let mut profile = Profile::default();
    ResultMapper::new()
        .map_rows(profile.as_destination(), &mut rows)
        .unwrap();
    profile
}

fn full() -> Profile {
    Profile {
        id: 42,
        user_name: "alice".into(),
        age: 31,
        active: true,
    }
}

proptest! {
    #[test]
    fn column_order_does_not_matter(order in Just((0..4).collect::<Vec<usize>>()).prop_shuffle()) {
        let columns = expected();
        let pairs = order
            .into_iter()
            .map(|i| (columns[i].0.to_string(), columns[i].1.clone()))
            .collect();

        prop_assert_eq!(map(pairs), full());
    }

    #[test]
    fn extra_columns_are_ignored(
        extras in prop::collection::vec(("x_[a-z]{1,8}", any::<i64>()), 0..6),
        seed in any::<u64>(),
    ) {
        let mut pairs: Vec<(String, Value)> = expected()
            .into_iter()
            .map(|(column, value)| (column.to_string(), value))
            .collect();

        for (offset, (column, value)) in extras.into_iter().enumerate() {
            let at = (seed as usize).wrapping_add(offset) % (pairs.len() + 1);
            pairs.insert(at, (column, Value::I64(value)));
        }

        prop_assert_eq!(map(pairs), full());
    }

    #[test]
    fn missing_columns_stay_zero(keep in prop::collection::vec(any::<bool>(), 4)) {
        let pairs: Vec<(String, Value)> = expected()
            .into_iter()
            .zip(&keep)
            .filter(|(_, keep)| **keep)
            .map(|((column, value), _)| (column.to_string(), value))
            .collect();

        let profile = map(pairs);
        let zero = Profile::default();

        prop_assert_eq!(profile.id, if keep[0] { 42 } else { zero.id });
        prop_assert_eq!(profile.user_name, if keep[1] { "alice".to_string() } else { zero.user_name });
        prop_assert_eq!(profile.age, if keep[2] { 31 } else { zero.age });
        prop_assert_eq!(profile.active, if keep[3] { true } else { zero.active });
    }

    #[test]
    fn resolved_names_are_fixed_points(name in "[A-Za-z_][A-Za-z0-9_]{0,16}") {
        let once = resolve_column_name(&name, None).into_owned();
        let twice = resolve_column_name(&once, None).into_owned();

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(once.to_lowercase(), once.clone());
        prop_assert!(once.matches('_').count() >= name.matches('_').count());
    }

    #[test]
    fn distinct_underscores_stay_distinct(word in "[a-z]{1,8}", gap in 1usize..4) {
        let name = format!("{word}{}id", "_".repeat(gap));

        prop_assert_eq!(resolve_column_name(&name, None), name.as_str());
    }
}
