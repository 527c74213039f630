//! Front-matter parsing.
//!
//! Handles the `---` delimited metadata block at the top of a content file.
//! This is deliberately not YAML: only flat `key: value` lines and `- item`
//! lists under a key with an empty value are understood.
//! ```markdown
//! ---
//! title: "E-commerce Platform"
//! order: 1
//! technologies:
//!   - "Magento"
//!   - PHP
//! ---
//!
//! Body content here
//! ```

use crate::record::{FieldValue, Record};

const DELIMITER: &str = "---";
const LIST_MARKER: &str = "- ";

/// Split a content file into the raw front-matter block and the body.
///
/// The first line must be `---` (surrounding whitespace allowed) and the
/// block ends at the next line that is `---` (trailing whitespace allowed).
/// Returns `None` when either delimiter is missing.
#[must_use]
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let (first, rest) = content.split_once('\n')?;
    if first.trim() != DELIMITER {
        return None;
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let bare = line.trim_end_matches(['\n', '\r']);
        if bare.trim_end() == DELIMITER {
            let block = &rest[..offset];
            let block = block.strip_suffix('\n').unwrap_or(block);
            let block = block.strip_suffix('\r').unwrap_or(block);
            let body = &rest[offset + line.len()..];
            return Some((block, body));
        }
        offset += line.len();
    }

    None
}

/// Parse the front matter of `content` into a [`Record`].
///
/// Never fails: a missing or unterminated block yields an empty record and
/// lines that fit no rule are skipped.
#[must_use]
pub fn parse(content: &str) -> Record {
    let Some((block, _body)) = split_frontmatter(content) else {
        return Record::new();
    };

    let lines: Vec<&str> = block.lines().collect();
    let mut parser = BlockParser::default();
    for (i, line) in lines.iter().enumerate() {
        parser.feed(line, lines.get(i + 1).copied());
    }
    parser.finish()
}

/// Line-at-a-time state machine over the raw block lines.
///
/// `active_key` names the list currently receiving `- ` items. It is set
/// only by a key whose value is empty and whose next raw line is a list
/// item, and cleared by every other key line.
#[derive(Debug, Default)]
struct BlockParser {
    record: Record,
    active_key: Option<String>,
}

impl BlockParser {
    fn feed(&mut self, line: &str, next: Option<&str>) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }

        if let Some(item) = trimmed.strip_prefix(LIST_MARKER) {
            self.push_item(item);
            return;
        }

        // Lines without a colon carry nothing we understand.
        let Some((key, value)) = trimmed.split_once(':') else {
            return;
        };
        let key = key.trim();
        let value = strip_quotes(value.trim());

        if value.is_empty() && next.is_some_and(is_list_item) {
            self.record.insert(key, FieldValue::List(Vec::new()));
            self.active_key = Some(key.to_string());
        } else {
            self.record.insert(key, value);
            self.active_key = None;
        }
    }

    fn push_item(&mut self, item: &str) {
        let Some(key) = self.active_key.as_deref() else {
            return;
        };
        if let Some(FieldValue::List(items)) = self.record.get_mut(key) {
            items.push(item.replace('"', ""));
        }
    }

    fn finish(self) -> Record {
        self.record
    }
}

fn is_list_item(line: &str) -> bool {
    line.trim().starts_with(LIST_MARKER)
}

/// Strip one matching pair of surrounding `"` or `'`. No escapes.
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn list(items: &[&str]) -> FieldValue {
        FieldValue::List(items.iter().map(|s| (*s).to_string()).collect())
    }

    #[test]
    fn split_frontmatter_extracts_block_and_body() {
        let content = "---\nname: Ada\ntitle: Engineer\n---\n\nHello\n";
        let (block, body) = split_frontmatter(content).unwrap();
        assert_eq!(block, "name: Ada\ntitle: Engineer");
        assert_eq!(body, "\nHello\n");
    }

    #[test]
    fn split_frontmatter_rejects_missing_opener() {
        assert!(split_frontmatter("name: Ada\n---\n").is_none());
        assert!(split_frontmatter("# Heading\n---\nname: Ada\n---\n").is_none());
    }

    #[test]
    fn split_frontmatter_rejects_missing_closer() {
        assert!(split_frontmatter("---\nname: Ada\ntitle: Engineer\n").is_none());
    }

    #[test]
    fn split_frontmatter_accepts_padded_delimiters_and_crlf() {
        let content = "  ---  \r\nname: Ada\r\n---   \r\nbody";
        let (block, body) = split_frontmatter(content).unwrap();
        assert_eq!(block, "name: Ada");
        assert_eq!(body, "body");
    }

    #[test]
    fn split_frontmatter_accepts_closer_at_end_of_input() {
        let (block, body) = split_frontmatter("---\nname: Ada\n---").unwrap();
        assert_eq!(block, "name: Ada");
        assert_eq!(body, "");
    }

    #[test]
    fn split_frontmatter_handles_empty_block() {
        let (block, body) = split_frontmatter("---\n---\nbody").unwrap();
        assert_eq!(block, "");
        assert_eq!(body, "body");
    }

    #[test]
    fn closing_delimiter_must_start_the_line() {
        assert!(split_frontmatter("---\nname: Ada\n  ---\n").is_none());
        assert!(split_frontmatter("---\nname: Ada\n----\n").is_none());
    }

    #[test]
    fn parses_scalar_lines() {
        let record = parse(
            "---\nname: \"Ada Lovelace\"\ntitle: 'Analyst'\n  order :  2  \n---\nbody",
        );
        assert_eq!(record.len(), 3);
        assert_eq!(record.scalar("name"), Some("Ada Lovelace"));
        assert_eq!(record.scalar("title"), Some("Analyst"));
        assert_eq!(record.scalar("order"), Some("2"));
    }

    #[test]
    fn value_keeps_everything_after_first_colon() {
        let record = parse("---\nlive_url: https://example.com:8080/x\n---\n");
        assert_eq!(record.scalar("live_url"), Some("https://example.com:8080/x"));
    }

    #[test]
    fn missing_front_matter_yields_empty_record() {
        assert!(parse("").is_empty());
        assert!(parse("just some text: with a colon\n").is_empty());
        assert!(parse("---\nname: Ada\n").is_empty());
    }

    #[test]
    fn unterminated_quote_is_kept_literally() {
        let record = parse("---\nkey: \"abc\n---\n");
        assert_eq!(record.scalar("key"), Some("\"abc"));
    }

    #[test]
    fn mismatched_quotes_are_kept() {
        let record = parse("---\na: \"abc'\nb: \"\nc: ''\n---\n");
        assert_eq!(record.scalar("a"), Some("\"abc'"));
        assert_eq!(record.scalar("b"), Some("\""));
        assert_eq!(record.scalar("c"), Some(""));
    }

    #[test]
    fn inner_quotes_are_not_unescaped() {
        let record = parse("---\nquote: \"say \\\"hi\\\"\"\n---\n");
        assert_eq!(record.scalar("quote"), Some("say \\\"hi\\\""));
    }

    #[test]
    fn list_items_attach_to_array_key() {
        let record = parse("---\ntechnologies:\n- \"Vue\"\n- React\n---\n");
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("technologies"), Some(&list(&["Vue", "React"])));
    }

    #[test]
    fn indented_list_items_and_inner_quotes() {
        let record = parse("---\ntags:\n  - \"a \"b\" c\"\n  -   spaced\n---\n");
        assert_eq!(record.get("tags"), Some(&list(&["a b c", "  spaced"])));
    }

    #[test]
    fn orphan_list_item_is_dropped() {
        let record = parse("---\ntitle: \"X\"\n- orphan\n---\n");
        assert_eq!(record.len(), 1);
        assert_eq!(record.scalar("title"), Some("X"));
    }

    #[test]
    fn list_item_before_any_key_is_dropped() {
        let record = parse("---\n- stray\nname: Ada\n---\n");
        assert_eq!(record.len(), 1);
        assert_eq!(record.scalar("name"), Some("Ada"));
    }

    #[test]
    fn scalar_key_clears_active_array_key() {
        let record = parse("---\ntags:\n- x\norder: 1\n- a\n---\n");
        assert_eq!(record.get("tags"), Some(&list(&["x"])));
        assert_eq!(record.scalar("order"), Some("1"));
    }

    #[test]
    fn empty_value_without_following_item_is_scalar() {
        // `tags` is followed by `order: 1`, not a list item, so it is the
        // empty scalar and the later `- a` has nowhere to go.
        let record = parse("---\ntags:\norder: 1\n- a\n---\n");
        assert_eq!(record.len(), 2);
        assert_eq!(record.scalar("tags"), Some(""));
        assert_eq!(record.scalar("order"), Some("1"));
    }

    #[test]
    fn blank_line_before_first_item_defeats_array_detection() {
        let record = parse("---\ntags:\n\n- a\n- b\n---\n");
        assert_eq!(record.len(), 1);
        assert_eq!(record.scalar("tags"), Some(""));
    }

    #[test]
    fn blank_lines_between_items_are_skipped() {
        let record = parse("---\ntags:\n- a\n\n   \n- b\n---\n");
        assert_eq!(record.get("tags"), Some(&list(&["a", "b"])));
    }

    #[test]
    fn quoted_empty_value_starts_an_array() {
        let record = parse("---\ntags: \"\"\n- a\n---\n");
        assert_eq!(record.get("tags"), Some(&list(&["a"])));
    }

    #[test]
    fn new_array_key_supersedes_previous_one() {
        let record = parse("---\nfirst:\n- a\nsecond:\n- b\n- c\n---\n");
        assert_eq!(record.get("first"), Some(&list(&["a"])));
        assert_eq!(record.get("second"), Some(&list(&["b", "c"])));
    }

    #[test]
    fn bare_dash_is_not_a_list_item() {
        // `- ` trims to `-`, so `first` never becomes a list.
        let record = parse("---\nfirst:\n- \nsecond: 2\n---\n");
        assert_eq!(record.len(), 2);
        assert_eq!(record.scalar("first"), Some(""));
        assert_eq!(record.scalar("second"), Some("2"));
    }

    #[test]
    fn lines_without_colon_are_ignored() {
        let record = parse("---\njust words\nname: Ada\n---\n");
        assert_eq!(record.len(), 1);
        assert_eq!(record.scalar("name"), Some("Ada"));
    }

    #[test]
    fn noise_lines_do_not_clear_active_key() {
        let record = parse("---\ntags:\n- a\nnot a pair\n- b\n---\n");
        assert_eq!(record.get("tags"), Some(&list(&["a", "b"])));
    }

    #[test]
    fn list_line_containing_colon_is_an_item() {
        let record = parse("---\nlinks:\n- https://example.com\n---\n");
        assert_eq!(record.get("links"), Some(&list(&["https://example.com"])));
        assert!(!record.contains_key("- https"));
    }

    #[test]
    fn later_duplicate_key_wins() {
        let record = parse("---\ntitle: one\ntitle: two\n---\n");
        assert_eq!(record.scalar("title"), Some("two"));
    }

    #[test]
    fn only_first_block_is_parsed() {
        let record = parse("---\na: 1\n---\n---\nb: 2\n---\n");
        assert_eq!(record.len(), 1);
        assert_eq!(record.scalar("a"), Some("1"));
    }

    #[test]
    fn duplicate_raw_lines_look_ahead_from_their_own_position() {
        let content = "---\ntags:\norder: 1\nother:\ntags:\n- a\n---\n";
        let record = parse(content);
        assert_eq!(record.get("tags"), Some(&list(&["a"])));
        assert_eq!(record.scalar("other"), Some(""));
    }

    fn scalar_value() -> impl Strategy<Value = String> {
        "[A-Za-z0-9 ./@-]{0,20}".prop_map(|s| s.trim().to_string())
    }

    proptest! {
        #[test]
        fn no_leading_delimiter_yields_empty_record(text in "[A-Za-z0-9#*][^\\n]{0,40}(\\n[^\\n]{0,40}){0,5}") {
            prop_assert!(parse(&text).is_empty());
        }

        #[test]
        fn parse_is_idempotent(text in "(---\\n)?([a-z]{1,5}: ?[a-z\"' ]{0,6}\\n|- [a-z\"]{0,5}\\n|\\n){0,8}(---\\n)?") {
            prop_assert_eq!(parse(&text), parse(&text));
        }

        #[test]
        fn scalar_blocks_round_trip(
            fields in proptest::collection::btree_map("[a-z_]{1,10}", scalar_value(), 0..8),
            quoted in any::<bool>(),
        ) {
            let mut content = String::from("---\n");
            for (key, value) in &fields {
                if quoted {
                    content.push_str(&format!("{key}: \"{value}\"\n"));
                } else {
                    content.push_str(&format!("  {key} :  {value}  \n"));
                }
            }
            content.push_str("---\nbody\n");

            let record = parse(&content);
            prop_assert_eq!(record.len(), fields.len());
            for (key, value) in &fields {
                prop_assert_eq!(record.scalar(key), Some(value.as_str()));
            }
        }
    }
}
