//! Tests for the Stack and Queue adapters over SinglyLinkedList

use rsds::{Queue, SinglyLinkedList, Stack};
use rstest::{fixture, rstest};

#[fixture]
fn stack() -> Stack<i32> {
    Stack::new()
}

#[rstest]
fn given_empty_stack_when_checking_len_then_zero(stack: Stack<i32>) {
    assert_eq!(stack.len(), 0);
    assert!(stack.is_empty());
}

#[rstest]
fn given_pushes_when_checking_len_then_counts_each(mut stack: Stack<i32>) {
    stack.push(2);
    assert_eq!(stack.len(), 1);
    stack.push(4);
    assert_eq!(stack.len(), 2);
    for v in [6, 8, 10, 12, 14, 16, 18] {
        stack.push(v);
    }
    assert_eq!(stack.len(), 9);
}

#[rstest]
fn given_empty_stack_when_popping_then_returns_none(mut stack: Stack<i32>) {
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.len(), 0);
}

#[rstest]
fn given_pushes_when_popping_then_respects_lifo_order(mut stack: Stack<i32>) {
    stack.push(100);
    stack.push(101);
    stack.push(105);
    assert_eq!(stack.pop(), Some(105));
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.pop(), Some(101));
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.pop(), Some(100));
    assert_eq!(stack.len(), 0);
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.len(), 0);
}

#[rstest]
fn given_enqueued_values_when_dequeuing_then_respects_fifo_order() {
    let mut queue = Queue::new();
    assert_eq!(queue.dequeue(), None);
    for v in ["a", "b", "c"] {
        queue.enqueue(v);
    }
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.dequeue(), Some("a"));
    queue.enqueue("d");
    assert_eq!(queue.dequeue(), Some("b"));
    assert_eq!(queue.dequeue(), Some("c"));
    assert_eq!(queue.dequeue(), Some("d"));
    assert_eq!(queue.dequeue(), None);
    assert!(queue.is_empty());
}

#[rstest]
fn given_linked_list_when_formatted_then_each_value_has_an_arrow() {
    let mut list = SinglyLinkedList::new();
    list.add_to_tail(2);
    list.add_to_tail(3);
    list.add_to_head(1);
    assert_eq!(list.to_string(), "1 -> 2 -> 3 -> ");
    assert!(list.contains(&3));
    assert!(!list.contains(&4));
    assert_eq!(list.remove_head(), Some(1));
    assert_eq!(list.len(), 2);
}
