use glue::{Context, Glue, GlueError, Message, Operation};
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
    .expect("valid observer key");
    log
}

fn msg(operation: Operation, value: Value, index: Option<usize>) -> Message {
    Message {
        operation,
        value: Some(value),
        index,
    }
}

#[test]
fn scenario_set_notifies_once() {
    let mut glue = Glue::new(json!({"a": 1}));
    let log = watch(&mut glue, "a");
    glue.set("a", json!(2)).unwrap();
    assert_eq!(*log.borrow(), vec![msg(Operation::Set, json!(2), None)]);
}

#[test]
fn scenario_push_reaches_generic_with_index() {
    let mut glue = Glue::new(json!({"arr": [1, 2, 3]}));
    let log = watch(&mut glue, "arr[]");
    glue.push("arr", json!(4)).unwrap();
    assert_eq!(*log.borrow(), vec![msg(Operation::Push, json!(4), Some(3))]);
}

#[test]
fn scenario_sort_by_reports_high_indices_first() {
    let mut glue = Glue::new(json!({"arr": [5, 3, 1]}));
    let log = watch(&mut glue, "arr[]");
    let sorted = glue.sort_by("arr", |v| v.as_i64()).unwrap();
    assert_eq!(sorted, vec![json!(1), json!(3), json!(5)]);
    assert_eq!(glue.get("arr"), Some(&json!([1, 3, 5])));
    assert_eq!(
        *log.borrow(),
        vec![
            msg(Operation::SortBy, json!(5), Some(2)),
            msg(Operation::SortBy, json!(1), Some(0)),
        ]
    );
}

#[test]
fn scenario_parent_and_child_both_fire() {
    let mut glue = Glue::new(json!({"x": {"y": 1}}));
    let parent = watch(&mut glue, "x");
    let child = watch(&mut glue, "x.y");
    glue.set("x.y", json!(2)).unwrap();
    assert_eq!(*parent.borrow(), vec![msg(Operation::Set, json!({"y": 2}), None)]);
    assert_eq!(*child.borrow(), vec![msg(Operation::Set, json!(2), None)]);
}

#[test]
fn scenario_swap_exchanges_values() {
    let mut glue = Glue::new(json!({"a": 1, "b": 2}));
    let a = watch(&mut glue, "a");
    let b = watch(&mut glue, "b");
    glue.swap("a", "b").unwrap();
    assert_eq!(glue.get("*"), Some(&json!({"a": 2, "b": 1})));
    assert_eq!(*a.borrow(), vec![msg(Operation::Swap, json!(2), None)]);
    assert_eq!(*b.borrow(), vec![msg(Operation::Swap, json!(1), None)]);
}

#[test]
fn swap_of_array_elements_reaches_generic_per_index() {
    let mut glue = Glue::new(json!({"arr": ["a", "b", "c"]}));
    let log = watch(&mut glue, "arr[]");
    glue.swap("arr[0]", "arr[2]").unwrap();
    assert_eq!(
        *log.borrow(),
        vec![
            msg(Operation::Swap, json!("c"), Some(0)),
            msg(Operation::Swap, json!("a"), Some(2)),
        ]
    );
}

#[test]
fn swap_calls_a_shared_ancestor_once() {
    let mut glue = Glue::new(json!({"pair": {"a": 1, "b": 2}}));
    let log = watch(&mut glue, "*, pair");
    glue.swap("pair.a", "pair.b").unwrap();
    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].value, Some(json!({"pair": {"a": 2, "b": 1}})));
    assert_eq!(log[1].value, Some(json!({"a": 2, "b": 1})));
}

#[test]
fn swap_reaches_aliased_observer() {
    let mut glue = Glue::new(json!({"left": {"v": 1}, "right": {"v": 2}}));
    let log = watch(&mut glue, "right.v");
    glue.swap("left", "right").unwrap();
    assert_eq!(*log.borrow(), vec![msg(Operation::Swap, json!(1), None)]);
}

#[test]
fn swap_with_itself_is_silent() {
    let mut glue = Glue::new(json!({"a": 1}));
    let log = watch(&mut glue, "*, a");
    glue.swap("a", "a").unwrap();
    assert!(log.borrow().is_empty());
}

#[test]
fn filter_reports_removals_from_the_top() {
    let mut glue = Glue::new(json!({"arr": [1, 2, 3, 4, 5]}));
    let log = watch(&mut glue, "arr[]");
    let kept = glue
        .filter("arr", |v| v.as_i64().is_some_and(|n| n % 2 == 1))
        .unwrap();
    assert_eq!(kept, vec![json!(1), json!(3), json!(5)]);
    let log = log.borrow();
    let indices: Vec<_> = log.iter().map(|m| m.index.unwrap()).collect();
    assert_eq!(indices, vec![4, 3, 2, 1]);
    // Past the new length the value no longer resolves.
    assert_eq!(log[0].value, None);
    assert_eq!(log[1].value, None);
    assert_eq!(log[2].value, Some(json!(5)));
    assert_eq!(log[3].value, Some(json!(3)));
}

#[test]
fn remove_index_reports_only_the_removed_slot() {
    let mut glue = Glue::new(json!({"arr": [1, 2, 3]}));
    let log = watch(&mut glue, "arr[]");
    let whole = watch(&mut glue, "arr");
    assert_eq!(glue.remove("arr[1]").unwrap(), Some(json!(2)));
    assert_eq!(glue.get("arr"), Some(&json!([1, 3])));
    assert_eq!(*log.borrow(), vec![msg(Operation::Remove, json!(3), Some(1))]);
    assert_eq!(*whole.borrow(), vec![msg(Operation::Remove, json!([1, 3]), None)]);
}

#[test]
fn remove_last_index_reports_absent_value() {
    let mut glue = Glue::new(json!({"arr": ["a", "b"]}));
    let log = watch(&mut glue, "arr[]");
    glue.remove("arr[1]").unwrap();
    let log = log.borrow();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].index, Some(1));
    assert_eq!(log[0].value, None);
}

#[test]
fn root_array_operations() {
    let mut glue = Glue::new(json!([1]));
    let log = watch(&mut glue, "[]");
    glue.push("", json!(2)).unwrap();
    assert_eq!(glue.pop("*").unwrap(), Some(json!(2)));
    let log = log.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0], msg(Operation::Push, json!(2), Some(1)));
    assert_eq!(log[1].operation, Operation::Pop);
    assert_eq!(log[1].index, Some(1));
}

#[test]
fn operation_filtered_observer_only_hears_its_operations() {
    let mut glue = Glue::new(json!({"list": []}));
    let log = watch(&mut glue, "list:push");
    glue.push("list", json!(1)).unwrap();
    glue.set("list", json!([9])).unwrap();
    glue.pop("list").unwrap();
    let log = log.borrow();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].operation, Operation::Push);
}

#[test]
fn removed_observer_hears_nothing() {
    let mut glue = Glue::new(json!({"a": 1}));
    let log = watch(&mut glue, "a");
    glue.remove_observers("a").unwrap();
    glue.set("a", json!(2)).unwrap();
    assert!(log.borrow().is_empty());
    assert!(glue.observed_paths().is_empty());
}

#[test]
fn removing_an_operation_keeps_the_rest() {
    let mut glue = Glue::new(json!({"list": [1]}));
    let log = watch(&mut glue, "list");
    glue.remove_observers("list:push").unwrap();
    glue.push("list", json!(2)).unwrap();
    glue.pop("list").unwrap();
    let log = log.borrow();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].operation, Operation::Pop);
}

#[test]
fn context_scoped_removal() {
    let mut glue = Glue::new(json!({"a": 1}));
    let log = Log::default();
    for ctx in ["left", "right"] {
        let sink = Rc::clone(&log);
        glue.add_observer_with("a", ctx, move |_, ctx, msg| {
            assert_eq!(ctx, &Context::from("right"));
            sink.borrow_mut().push(msg.clone());
            Ok(())
        })
        .unwrap();
    }
    glue.remove_observers_in(&Context::from("left"));
    glue.set("a", json!(2)).unwrap();
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn direct_target_mutation_is_unobserved() {
    let mut glue = Glue::new(json!({"a": 1}));
    let log = watch(&mut glue, "a");
    glue.target_mut()["a"] = json!(5);
    assert!(log.borrow().is_empty());
    // The next diff starts from the already-mutated state.
    glue.set("a", json!(5)).unwrap();
    assert!(log.borrow().is_empty());
}

#[test]
fn errors_surface_to_the_caller() {
    let mut glue = Glue::new(json!({"n": 1, "obj": {}}));
    assert!(matches!(glue.set("missing.x", json!(1)), Err(GlueError::Path(_))));
    assert!(matches!(glue.push("n", json!(1)), Err(GlueError::NotAnArray(_))));
    assert!(matches!(glue.insert("obj", 0, json!(1)), Err(GlueError::NotAnArray(_))));
    assert!(matches!(
        glue.add_observer_at("n:explode", |_, _, _| Ok(())),
        Err(GlueError::UnknownOperation(_))
    ));
}

#[test]
fn observer_error_propagates_from_mutation() {
    let mut glue = Glue::new(json!({"a": 1}));
    glue.add_observer_at("a", |_, _, msg| {
        if msg.value == Some(json!(13)) {
            return Err(GlueError::observer("unlucky"));
        }
        Ok(())
    })
    .unwrap();
    glue.set("a", json!(12)).unwrap();
    let err = glue.set("a", json!(13)).unwrap_err();
    assert_eq!(err.to_string(), "observer failed: unlucky");
}
