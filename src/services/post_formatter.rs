//! 帖子内容生成 - 业务能力层
//!
//! 只负责把题目渲染成标题和正文，日期由调用方传入

use crate::error::BankError;
use crate::models::question::Question;
use chrono::NaiveDate;

/// 固定免责声明，每篇帖子出现且仅出现一次
pub const DISCLAIMER: &str = "_This community does **not** encourage or promote illegal activity. \
All discussion is for educational and harm-reduction purposes only._";

/// 昨日答案小节标题
pub const PREVIOUS_ANSWER_HEADING: &str = "**Yesterday's answer:**";

/// 今日题目小节标题
pub const TODAY_HEADING: &str = "**Today's Darknet / OPSEC Question:**";

/// 行动号召
pub const CALL_TO_ACTION: &str =
    "Vote in the poll below — the correct answer will appear in tomorrow's post.";

/// 小节分隔线
pub const SEPARATOR: &str = "---";

/// 渲染完成的帖子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent {
    pub title: String,
    pub body: String,
}

/// 用 Reddit 剧透语法包裹文本
pub fn spoiler(text: &str) -> String {
    format!(">!{}!<", text)
}

/// 帖子标题
pub fn format_title(current: &Question, today: NaiveDate) -> String {
    format!(
        "Darknet Question of the Day #{} ({})",
        current.id,
        today.format("%Y-%m-%d")
    )
}

/// 生成帖子标题和正文
///
/// # 参数
/// - `previous`: 上一道题（首次运行为 `None`）
/// - `current`: 今天要发布的题
/// - `today`: 标题中使用的日期
///
/// # 返回
/// 任一题目的答案索引越界时返回错误
pub fn format_post(
    previous: Option<&Question>,
    current: &Question,
    today: NaiveDate,
) -> Result<PostContent, BankError> {
    current.correct_option()?;

    let mut body = String::new();

    if let Some(prev) = previous {
        let correct = prev.correct_option()?;
        body.push_str(PREVIOUS_ANSWER_HEADING);
        body.push('\n');
        body.push_str(&spoiler(correct));
        body.push_str("\n\n");
        body.push_str(&prev.explanation);
        body.push_str("\n\n");
        body.push_str(SEPARATOR);
        body.push_str("\n\n");
    }

    body.push_str(DISCLAIMER);
    body.push_str("\n\n");

    body.push_str(TODAY_HEADING);
    body.push_str("\n\n");
    body.push_str(&current.question);
    body.push_str("\n\n");
    body.push_str(CALL_TO_ACTION);
    body.push('\n');

    Ok(PostContent {
        title: format_title(current, today),
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, answer_index: usize) -> Question {
        Question {
            id,
            question: format!("What is question {}?", id),
            options: vec![
                format!("q{} first", id),
                format!("q{} second", id),
                format!("q{} third", id),
                format!("q{} fourth", id),
            ],
            answer_index,
            explanation: format!("Explanation for {}.", id),
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
    }

    #[test]
    fn test_title_embeds_id_and_date() {
        let post = format_post(None, &question(12, 0), day()).unwrap();
        assert_eq!(post.title, "Darknet Question of the Day #12 (2026-10-17)");
    }

    #[test]
    fn test_first_post_has_no_previous_section() {
        let post = format_post(None, &question(1, 0), day()).unwrap();
        assert!(!post.body.contains(PREVIOUS_ANSWER_HEADING));
        assert!(!post.body.contains(">!"));
        assert!(post.body.starts_with(DISCLAIMER));
        assert_eq!(post.body.matches(DISCLAIMER).count(), 1);
    }

    #[test]
    fn test_previous_answer_revealed_exactly() {
        let prev = question(1, 3);
        let post = format_post(Some(&prev), &question(2, 0), day()).unwrap();

        let start = post.body.find(">!").unwrap() + 2;
        let end = post.body.find("!<").unwrap();
        assert_eq!(&post.body[start..end], prev.options[prev.answer_index]);
        assert_eq!(post.body.matches(DISCLAIMER).count(), 1);
    }

    #[test]
    fn test_body_layout() {
        let post = format_post(Some(&question(1, 2)), &question(2, 0), day()).unwrap();
        let expected = format!(
            "**Yesterday's answer:**\n>!q1 third!<\n\nExplanation for 1.\n\n---\n\n\
             {}\n\n**Today's Darknet / OPSEC Question:**\n\nWhat is question 2?\n\n{}\n",
            DISCLAIMER, CALL_TO_ACTION
        );
        assert_eq!(post.body, expected);
    }

    #[test]
    fn test_sections_in_order() {
        let post = format_post(Some(&question(1, 1)), &question(2, 0), day()).unwrap();
        let answer = post.body.find(PREVIOUS_ANSWER_HEADING).unwrap();
        let disclaimer = post.body.find(DISCLAIMER).unwrap();
        let today = post.body.find(TODAY_HEADING).unwrap();
        let cta = post.body.find(CALL_TO_ACTION).unwrap();
        assert!(answer < disclaimer && disclaimer < today && today < cta);
    }

    #[test]
    fn test_out_of_range_previous_answer_fails() {
        let result = format_post(Some(&question(1, 4)), &question(2, 0), day());
        assert!(matches!(
            result,
            Err(BankError::AnswerOutOfRange { id: 1, .. })
        ));
    }

    #[test]
    fn test_out_of_range_current_answer_fails() {
        let result = format_post(None, &question(5, 10), day());
        assert!(matches!(
            result,
            Err(BankError::AnswerOutOfRange { id: 5, .. })
        ));
    }
}
