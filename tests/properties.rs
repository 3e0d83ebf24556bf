// Property tests for the data-structure core

use quickcheck::quickcheck;

use dsviz::structures::{BinaryTree, LinkedList, Outcome, Stack};

quickcheck! {
    /// In-order traversal of a BST is sorted and duplicate-free, whatever
    /// the insertion order and however many duplicates were inserted.
    fn bst_in_order_is_sorted_and_deduplicated(values: Vec<i32>) -> bool {
        let mut tree = BinaryTree::new();
        for &value in &values {
            tree.insert(value);
        }

        let mut expected = values;
        expected.sort_unstable();
        expected.dedup();

        tree.iter().collect::<Vec<i32>>() == expected
    }

    /// A successful list removal shrinks the length by exactly one and drops
    /// exactly one occurrence of the target value.
    fn list_removal_shrinks_length_by_one(values: Vec<i32>, target: i32) -> bool {
        let mut list = LinkedList::new();
        for &value in &values {
            list.insert(value);
        }

        let len_before = list.len();
        let occurrences_before = list.iter().filter(|&v| v == target).count();
        let outcome = list.remove(target);
        let occurrences_after = list.iter().filter(|&v| v == target).count();

        if occurrences_before > 0 {
            outcome == Outcome::Removed(target)
                && list.len() == len_before - 1
                && occurrences_after == occurrences_before - 1
        } else {
            list.len() == len_before && occurrences_after == 0
        }
    }

    /// Removing an absent value leaves the rendering byte-for-byte unchanged.
    fn remove_absent_keeps_rendering(values: Vec<i32>, target: i32) -> bool {
        if values.contains(&target) {
            return true;
        }

        let mut list = LinkedList::new();
        let mut tree = BinaryTree::new();
        for &value in &values {
            list.insert(value);
            tree.insert(value);
        }

        let list_before = list.render();
        let tree_before = tree.render();
        list.remove(target);
        tree.remove(target);

        list.render() == list_before && tree.render() == tree_before
    }

    /// Push followed by pop reports the pushed value and is a no-op on the
    /// remaining contents.
    fn stack_push_then_pop_is_a_noop(values: Vec<i32>, extra: i32) -> bool {
        let mut stack = Stack::new();
        for &value in &values {
            stack.push(value);
        }

        let before = stack.render();
        stack.push(extra);
        let popped = stack.pop();

        popped == Outcome::Popped(extra) && stack.render() == before
    }

    /// Tree removal of a present value drops it from the traversal and keeps
    /// the remaining values sorted.
    fn bst_removal_keeps_order(values: Vec<i32>, target: i32) -> bool {
        let mut tree = BinaryTree::new();
        for &value in &values {
            tree.insert(value);
        }
        tree.insert(target);

        let outcome = tree.remove(target);
        let remaining: Vec<i32> = tree.iter().collect();

        let mut expected: Vec<i32> = values;
        expected.sort_unstable();
        expected.dedup();
        expected.retain(|&v| v != target);

        outcome == Outcome::Removed(target) && remaining == expected
    }
}
