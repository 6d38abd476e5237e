//! Property-based tests for collection lookup and deletion.

use super::{find_by_id, without_id};
use crate::record::Record;
use crate::Customer;
use proptest::prelude::*;

// Ids drawn from a small alphabet so duplicates and hits are common
fn id_strategy() -> impl Strategy<Value = String> {
    "C[0-9]"
}

fn customers_strategy() -> impl Strategy<Value = Vec<Customer>> {
    prop::collection::vec((id_strategy(), "[a-z]{1,8}"), 0..20).prop_map(|rows| {
        rows.into_iter()
            .map(|(id, name)| {
                let email = format!("{name}@example.com");
                Customer::new(id, name, email)
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Deletion keeps exactly the non-matching records, in their original order
    #[test]
    fn delete_keeps_others_in_order(customers in customers_strategy(), id in id_strategy()) {
        let expected: Vec<Customer> = customers
            .iter()
            .filter(|c| c.customer_id != id)
            .cloned()
            .collect();
        let remaining = without_id(&id, customers);
        prop_assert_eq!(remaining, expected);
    }

    // After deletion the id can no longer be found
    #[test]
    fn deleted_id_is_not_found(customers in customers_strategy(), id in id_strategy()) {
        let remaining = without_id(&id, customers);
        prop_assert!(find_by_id(&id, &remaining).is_none());
    }

    // Lookup returns the first record carrying the id
    #[test]
    fn find_returns_first_match(customers in customers_strategy(), id in id_strategy()) {
        let expected = customers.iter().position(|c| c.id() == id);
        let found = find_by_id(&id, &customers).map(|c| c as *const Customer);
        prop_assert_eq!(found, expected.map(|i| &customers[i] as *const Customer));
    }
}
