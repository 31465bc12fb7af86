//! # Domain Entities
//!
//! MongoDB 컬렉션과 1:1로 대응되는 영속 엔티티입니다.
//!
//! | 엔티티 | 컬렉션 |
//! |--------|--------|
//! | [`users::BaseUser`] | `users` |

pub mod users;
