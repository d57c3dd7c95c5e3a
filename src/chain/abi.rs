//! Contract Call Interface
//!
//! `sol!`-generated types matching the deployed Todo contract's ABI.

use alloy_sol_types::sol;

use crate::models::Todo;

sol! {
    /// Todo entry as stored by the contract.
    #[derive(Debug, PartialEq, Eq)]
    struct TodoItem {
        string title;
        string description;
        bool isCompleted;
    }

    function addTodo(string _title, string _description);
    function showTodos() returns (TodoItem[]);
    function showTodo(uint256 _todoIndex) returns (TodoItem);
    function updateTodoStatus(uint256 _todoIndex);
    function deleteTodo(uint256 _todoIndex);
}

impl From<TodoItem> for Todo {
    fn from(item: TodoItem) -> Self {
        Todo {
            title: item.title,
            description: item.description,
            completed: item.isCompleted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::U256;
    use alloy_sol_types::SolCall;

    #[test]
    fn add_todo_calldata_round_trips() {
        let call = addTodoCall {
            _title: "Buy milk".into(),
            _description: "2%".into(),
        };
        let data = call.abi_encode();
        assert_eq!(data[..4], addTodoCall::SELECTOR);

        let decoded = addTodoCall::abi_decode(&data).expect("calldata should decode");
        assert_eq!(decoded._title, "Buy milk");
        assert_eq!(decoded._description, "2%");
    }

    #[test]
    fn show_todos_calldata_is_bare_selector() {
        let data = showTodosCall {}.abi_encode();
        assert_eq!(data, showTodosCall::SELECTOR.to_vec());
    }

    #[test]
    fn index_calls_carry_the_index() {
        let data = updateTodoStatusCall { _todoIndex: U256::from(3u64) }.abi_encode();
        assert_eq!(data[..4], updateTodoStatusCall::SELECTOR);
        let decoded = updateTodoStatusCall::abi_decode(&data).expect("calldata should decode");
        assert_eq!(decoded._todoIndex, U256::from(3u64));

        let data = deleteTodoCall { _todoIndex: U256::from(7u64) }.abi_encode();
        let decoded = deleteTodoCall::abi_decode(&data).expect("calldata should decode");
        assert_eq!(decoded._todoIndex, U256::from(7u64));
    }

    #[test]
    fn mutating_selectors_are_distinct() {
        let selectors = [
            addTodoCall::SELECTOR,
            showTodosCall::SELECTOR,
            showTodoCall::SELECTOR,
            updateTodoStatusCall::SELECTOR,
            deleteTodoCall::SELECTOR,
        ];
        for (i, a) in selectors.iter().enumerate() {
            for b in selectors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn contract_item_maps_onto_the_ui_model() {
        let item = TodoItem {
            title: "Buy milk".into(),
            description: "2%".into(),
            isCompleted: true,
        };
        let todo: crate::models::Todo = item.into();
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(todo.description, "2%");
        assert!(todo.completed);
    }
}
