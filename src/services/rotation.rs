//! 轮换规则 - 业务能力层
//!
//! 纯函数，不读写任何文件

use crate::error::BankError;

/// 计算下一道题的位置
///
/// # 参数
/// - `last_index`: 上次发布的题目位置，首次运行为 `None`
/// - `bank_size`: 题库大小
///
/// # 返回
/// 首次运行返回 0，否则返回 `(last_index + 1) % bank_size`；题库为空时返回错误
pub fn next_index(last_index: Option<usize>, bank_size: usize) -> Result<usize, BankError> {
    if bank_size == 0 {
        return Err(BankError::Empty);
    }
    Ok(match last_index {
        None => 0,
        Some(last) => (last + 1) % bank_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_first_run_starts_at_zero() {
        assert_eq!(next_index(None, 3).unwrap(), 0);
        assert_eq!(next_index(None, 1).unwrap(), 0);
    }

    #[test]
    fn test_advances_and_wraps() {
        for size in 1..10 {
            for last in 0..size {
                assert_eq!(next_index(Some(last), size).unwrap(), (last + 1) % size);
            }
        }
        assert_eq!(next_index(Some(2), 3).unwrap(), 0);
    }

    #[test]
    fn test_empty_bank_is_error() {
        assert!(matches!(next_index(None, 0), Err(BankError::Empty)));
        assert!(matches!(next_index(Some(0), 0), Err(BankError::Empty)));
    }

    #[test]
    fn test_full_cycle_visits_every_index_once() {
        let size = 7;
        let start = 4;
        let mut seen = HashSet::new();
        let mut current = start;
        for _ in 0..size {
            assert!(seen.insert(current), "index {} repeated", current);
            current = next_index(Some(current), size).unwrap();
        }
        assert_eq!(current, start);
        assert_eq!(seen.len(), size);
    }

    #[test]
    fn test_three_question_sequence() {
        let mut last = None;
        let mut posted = Vec::new();
        for _ in 0..4 {
            let index = next_index(last, 3).unwrap();
            posted.push(index);
            last = Some(index);
        }
        assert_eq!(posted, vec![0, 1, 2, 0]);
    }
}
