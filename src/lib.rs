//! 惰性、可组合的流式数据处理。
//!
//! ```
//! use rstream::stream::Stream;
//! use rstream::stream::collector::to_list;
//!
//! let evens = Stream::range(0, 10).filter(|v| v % 2 == 0).map(|v| v.to_string()).collect(to_list).unwrap();
//! assert_eq!(evens, vec!["0", "2", "4", "6", "8"]);
//! ```
//!
//! 收集出的列表可以继续交给[`array`]的辅助函数或[`collection::Collection`]：
//!
//! ```
//! use rstream::array::{chunk, diff};
//! use rstream::collection::collect_by;
//! use rstream::stream::collector::to_list;
//! use rstream::Stream;
//!
//! let list = Stream::range(1, 8).collect(to_list).unwrap();
//! assert_eq!(chunk(&list, 3), vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
//! assert_eq!(diff(&list, &[1, 2, 3]), vec![4, 5, 6, 7]);
//!
//! let by_parity = collect_by(list, |v| v % 2);
//! assert_eq!(by_parity.count(), 2);
//! assert_eq!(by_parity.get(&0), Some(&2));
//! ```

pub mod array;
pub mod collection;
pub mod stream;

/// 整数类型
pub type Integer = i64;

pub use stream::err::StreamErr;
pub use stream::Stream;
