//! 工人列表的文本输出
//!
//! 表格使用固定列宽，超出列宽的值不截断，直接撑开该行

use crate::storage::Worker;
use anyhow::Result;

/// 列表为空时的提示
pub const EMPTY_MESSAGE: &str = "List is empty.";

const INDEX_WIDTH: usize = 4;
const NAME_WIDTH: usize = 30;
const PHONE_WIDTH: usize = 15;
const BIRTHDAY_WIDTH: usize = 15;

/// 渲染工人表格
///
/// # Arguments
///
/// * `workers` - 要显示的记录，序号按输入顺序从 1 开始
///
/// # Returns
///
/// 表格文本（不含末尾换行），记录为空时返回 [`EMPTY_MESSAGE`]
pub fn render(workers: &[Worker]) -> String {
    if workers.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let border = border_line();
    let mut lines = Vec::with_capacity(workers.len() * 2 + 3);

    lines.push(border.clone());
    lines.push(format!(
        "| {:^iw$} | {:^nw$} | {:^pw$} | {:^bw$} |",
        "No",
        "Name",
        "Phone",
        "Birthday",
        iw = INDEX_WIDTH,
        nw = NAME_WIDTH,
        pw = PHONE_WIDTH,
        bw = BIRTHDAY_WIDTH,
    ));
    lines.push(border.clone());

    for (idx, worker) in workers.iter().enumerate() {
        lines.push(format!(
            "| {:^iw$} | {:<nw$} | {:<pw$} | {:<bw$} |",
            idx + 1,
            worker.name,
            worker.number,
            worker.birthday,
            iw = INDEX_WIDTH,
            nw = NAME_WIDTH,
            pw = PHONE_WIDTH,
            bw = BIRTHDAY_WIDTH,
        ));
        lines.push(border.clone());
    }

    lines.join("\n")
}

/// 以 JSON 数组输出记录
pub fn render_json(workers: &[Worker]) -> Result<String> {
    Ok(serde_json::to_string_pretty(workers)?)
}

fn border_line() -> String {
    format!(
        "+-{}-+-{}-+-{}-+-{}-+",
        "-".repeat(INDEX_WIDTH),
        "-".repeat(NAME_WIDTH),
        "-".repeat(PHONE_WIDTH),
        "-".repeat(BIRTHDAY_WIDTH),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Worker {
        Worker::new("Ann Lee", "1990-01-01", 555)
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[]), "List is empty.");
    }

    #[test]
    fn test_render_single_row() {
        let output = render(&[ann()]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 5);
        let border = border_line();
        assert_eq!(lines[0], border);
        assert_eq!(lines[2], border);
        assert_eq!(lines[4], border);

        assert!(lines[1].contains("Name"));
        assert!(lines[1].contains("Birthday"));

        let row = lines[3];
        assert!(row.starts_with("|  1   | Ann Lee "));
        assert!(row.contains("| 555             |"));
        assert!(row.contains("| 1990-01-01      |"));
    }

    #[test]
    fn test_render_column_widths() {
        let output = render(&[ann()]);
        let widths: Vec<usize> = output.lines().map(|l| l.chars().count()).collect();
        // 4 + 30 + 15 + 15 加上分隔符
        let expected = 4 + 30 + 15 + 15 + 13;
        assert!(widths.iter().all(|w| *w == expected));
    }

    #[test]
    fn test_render_index_follows_input_order() {
        let workers = vec![ann(), Worker::new("Bob Ray", "1985-05-05", 777)];
        let output = render(&workers);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 7);
        assert!(lines[3].starts_with("|  1   | Ann Lee"));
        assert!(lines[5].starts_with("|  2   | Bob Ray"));
    }

    #[test]
    fn test_render_long_name_overflows() {
        let long = "X".repeat(40);
        let output = render(&[Worker::new(long.clone(), "2000-01-01", 1)]);
        let row = output.lines().nth(3).unwrap();
        assert!(row.contains(&long));
        assert!(row.chars().count() > border_line().chars().count());
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&[ann()]).unwrap();
        let parsed: Vec<Worker> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vec![ann()]);
    }
}
