//! CSVコーデック
//!
//! バックエンドが返す生CSVテキストを表構造にデコードする。
//! 1行目をヘッダとして解釈し、以降の各行をヘッダ幅に正規化した
//! レコードとして保持する。
//!
//! デコードは全域関数で、失敗しない:
//! - ヘッダ行がない入力（空文字）は空の表になる
//! - ヘッダより短い行は末尾を空文字で埋める
//! - ヘッダより長い行は超過分を捨てる

use serde::{Deserialize, Serialize};

/// CSVの1レコード
///
/// セルはヘッダの左から右の順に並び、常にヘッダと同じ個数を持つ。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CsvRow {
    cells: Vec<String>,
}

impl CsvRow {
    /// セル一覧（ヘッダ順）
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// デコード済みのCSV表
///
/// 行順は入力ファイルの順、列順は1行目のヘッダ順を保つ。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CsvTable {
    headers: Vec<String>,
    rows: Vec<CsvRow>,
}

impl CsvTable {
    /// CSVテキストをデコードする
    pub fn decode(text: &str) -> Self {
        let mut records = parse_records(text).into_iter();
        let Some(headers) = records.next() else {
            return Self::default();
        };

        let width = headers.len();
        let rows = records
            .map(|mut cells| {
                // 短い行は空文字で埋め、長い行はヘッダ幅に切り詰める
                cells.resize(width, String::new());
                CsvRow { cells }
            })
            .collect();

        Self { headers, rows }
    }

    /// ヘッダ一覧（元の左から右の順）
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// レコード一覧（元ファイルの行順）
    pub fn rows(&self) -> &[CsvRow] {
        &self.rows
    }

    /// レコードが1件もないか
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 行番号と列名でセルを引く
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.headers.iter().position(|h| h == column)?;
        self.rows.get(row)?.cells.get(index).map(|s| s.as_str())
    }
}

/// テキスト全体をレコード列に分解する
///
/// RFC 4180相当の引用符処理:
/// - 引用符内のカンマ・改行はフィールドの一部
/// - 引用符内の `""` は `"` 1文字にアンエスケープ
/// - CRLFのCRは引用符外では無視
fn parse_records(text: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    // 引用符を見たレコードは空に見えても空行ではない（"" 単独行は空値1セル）
    let mut saw_quote = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => {
                    in_quotes = true;
                    saw_quote = true;
                }
                ',' => record.push(std::mem::take(&mut field)),
                '\r' => {}
                '\n' => {
                    record.push(std::mem::take(&mut field));
                    push_record(&mut records, std::mem::take(&mut record), saw_quote);
                    saw_quote = false;
                }
                _ => field.push(c),
            }
        }
    }

    // 改行で終わらない最終レコード
    if !field.is_empty() || !record.is_empty() || saw_quote {
        record.push(field);
        push_record(&mut records, record, saw_quote);
    }

    records
}

fn push_record(records: &mut Vec<Vec<String>>, record: Vec<String>, saw_quote: bool) {
    // 本当に何もない行だけスキップ
    if !saw_quote && record.len() == 1 && record[0].is_empty() {
        return;
    }
    records.push(record);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_two_rows() {
        let table = CsvTable::decode("a,b\n1,2\n3,4");
        assert_eq!(table.headers(), &["a", "b"]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.get(0, "a"), Some("1"));
        assert_eq!(table.get(0, "b"), Some("2"));
        assert_eq!(table.get(1, "a"), Some("3"));
        assert_eq!(table.get(1, "b"), Some("4"));
    }

    #[test]
    fn test_decode_preserves_row_order() {
        let table = CsvTable::decode("name\nСаша\nМаша\nЖеня");
        let names: Vec<&str> = table.rows().iter().map(|r| r.cells()[0].as_str()).collect();
        assert_eq!(names, vec!["Саша", "Маша", "Женя"]);
    }

    #[test]
    fn test_decode_short_row_padded() {
        // ヘッダより短い行は末尾が空文字になる
        let table = CsvTable::decode("a,b\n1");
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.get(0, "a"), Some("1"));
        assert_eq!(table.get(0, "b"), Some(""));
    }

    #[test]
    fn test_decode_long_row_truncated() {
        // ヘッダより長い行は超過分を捨てる
        let table = CsvTable::decode("a,b\n1,2,3,4");
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].cells(), &["1", "2"]);
    }

    #[test]
    fn test_decode_empty_input() {
        let table = CsvTable::decode("");
        assert!(table.headers().is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_decode_header_only() {
        let table = CsvTable::decode("name,gender\n");
        assert_eq!(table.headers(), &["name", "gender"]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_decode_crlf() {
        let table = CsvTable::decode("a,b\r\n1,2\r\n");
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.get(0, "b"), Some("2"));
    }

    #[test]
    fn test_decode_skips_blank_lines() {
        let table = CsvTable::decode("a,b\n1,2\n\n3,4\n");
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.get(1, "a"), Some("3"));
    }

    #[test]
    fn test_decode_quoted_empty_cell_row_kept() {
        // "" 単独行は空行ではなく、空値1セルのレコードとして残る
        let table = CsvTable::decode("name\n\"\"\nМаша");
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.get(0, "name"), Some(""));
        assert_eq!(table.get(1, "name"), Some("Маша"));
    }

    #[test]
    fn test_decode_quoted_comma() {
        let table = CsvTable::decode("name,remark\n\"Иванов, Иван\",ok");
        assert_eq!(table.get(0, "name"), Some("Иванов, Иван"));
        assert_eq!(table.get(0, "remark"), Some("ok"));
    }

    #[test]
    fn test_decode_escaped_quote() {
        let table = CsvTable::decode("a\n\"he said \"\"hi\"\"\"");
        assert_eq!(table.get(0, "a"), Some("he said \"hi\""));
    }

    #[test]
    fn test_decode_quoted_newline() {
        let table = CsvTable::decode("a,b\n\"line1\nline2\",x");
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.get(0, "a"), Some("line1\nline2"));
        assert_eq!(table.get(0, "b"), Some("x"));
    }

    #[test]
    fn test_decode_no_trailing_newline() {
        let table = CsvTable::decode("a,b\n1,2");
        assert_eq!(table.rows().len(), 1);
    }

    #[test]
    fn test_get_unknown_column() {
        let table = CsvTable::decode("a,b\n1,2");
        assert_eq!(table.get(0, "c"), None);
        assert_eq!(table.get(5, "a"), None);
    }

    #[test]
    fn test_header_order_preserved() {
        let table = CsvTable::decode("name,gender,full_name,corrected_input\n");
        assert_eq!(
            table.headers(),
            &["name", "gender", "full_name", "corrected_input"]
        );
    }
}
