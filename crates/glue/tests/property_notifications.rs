use glue::{Glue, Message, Operation};
use proptest::prelude::*;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;

type Log = Rc<RefCell<Vec<Message>>>;

fn watch(glue: &mut Glue, keys: &str) -> Log {
    let log = Log::default();
    let sink = Rc::clone(&log);
    glue.add_observer_at(keys, move |_, _, msg| {
        sink.borrow_mut().push(msg.clone());
        Ok(())
    })
    .unwrap();
    log
}

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z]{0,4}".prop_map(Value::String),
    ]
}

fn arb_key() -> impl Strategy<Value = String> {
    "[a-e]"
}

fn arb_operation() -> impl Strategy<Value = Operation> {
    prop::sample::select(Operation::ALL.to_vec())
}

proptest! {
    #[test]
    fn setting_the_same_value_twice_notifies_once(key in arb_key(), value in arb_scalar()) {
        let mut glue = Glue::new(json!({}));
        let log = watch(&mut glue, &key);
        glue.set(&key, value.clone()).unwrap();
        glue.set(&key, value.clone()).unwrap();
        prop_assert_eq!(log.borrow().len(), 1);
        prop_assert_eq!(log.borrow()[0].value.clone(), Some(value));
    }

    #[test]
    fn get_after_set_returns_value(key in arb_key(), value in arb_scalar()) {
        let mut glue = Glue::new(json!({"a": 0, "b": [1]}));
        glue.set(&key, value.clone()).unwrap();
        prop_assert_eq!(glue.get(&key), Some(&value));
    }

    #[test]
    fn swap_with_itself_is_silent(key in arb_key(), value in arb_scalar()) {
        let mut glue = Glue::new(json!({}));
        glue.set(&key, value).unwrap();
        let log = watch(&mut glue, &format!("*, {key}"));
        let before = glue.target().clone();
        glue.swap(&key, &key).unwrap();
        prop_assert!(log.borrow().is_empty());
        prop_assert_eq!(glue.target(), &before);
    }

    #[test]
    fn operation_filter_is_respected(op in arb_operation(), items in prop::collection::vec(0i64..5, 0..6)) {
        let mut glue = Glue::new(json!({"list": items}));
        let log = watch(&mut glue, &format!("list:{op}"));
        glue.push("list", json!(9)).unwrap();
        glue.insert("list", 0, json!(8)).unwrap();
        glue.sort_by("list", |v| v.as_i64()).unwrap();
        glue.filter("list", |v| v.as_i64() != Some(9)).unwrap();
        glue.pop("list").unwrap();
        glue.set("list", json!([])).unwrap();
        for msg in log.borrow().iter() {
            prop_assert_eq!(msg.operation, op);
        }
    }

    #[test]
    fn push_notifies_generic_once_at_old_length(
        items in prop::collection::vec(arb_scalar(), 0..8),
        value in arb_scalar(),
    ) {
        let len = items.len();
        let mut glue = Glue::new(json!({"list": items}));
        let log = watch(&mut glue, "list[]");
        glue.push("list", value.clone()).unwrap();
        let log = log.borrow();
        prop_assert_eq!(log.len(), 1);
        prop_assert_eq!(log[0].index, Some(len));
        prop_assert_eq!(log[0].value.clone(), Some(value));
    }

    #[test]
    fn filter_reports_strictly_descending_indices(
        items in prop::collection::vec(0i64..10, 0..12),
        cutoff in 0i64..10,
    ) {
        let mut glue = Glue::new(json!({"list": items}));
        let log = watch(&mut glue, "list[]");
        glue.filter("list", |v| v.as_i64().is_some_and(|n| n < cutoff)).unwrap();
        let indices: Vec<usize> = log.borrow().iter().filter_map(|m| m.index).collect();
        prop_assert!(indices.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn sort_by_leaves_a_sorted_array(items in prop::collection::vec(-50i64..50, 0..12)) {
        let mut glue = Glue::new(json!({"list": items.clone()}));
        let sorted = glue.sort_by("list", |v| v.as_i64()).unwrap();
        let mut expected = items;
        expected.sort();
        prop_assert_eq!(sorted, expected.into_iter().map(|n| json!(n)).collect::<Vec<_>>());
    }

    #[test]
    fn removed_observers_never_fire(key in arb_key(), values in prop::collection::vec(arb_scalar(), 1..5)) {
        let mut glue = Glue::new(json!({}));
        let log = watch(&mut glue, &format!("{key}, *"));
        glue.remove_observers(&format!("{key}, *")).unwrap();
        for value in values {
            glue.set(&key, value).unwrap();
        }
        prop_assert!(log.borrow().is_empty());
    }
}
