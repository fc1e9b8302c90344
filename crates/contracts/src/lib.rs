//! Типы, общие для backend и frontend: страница результатов, товар,
//! параметры запроса списка.

pub mod domain;
pub mod shared;
