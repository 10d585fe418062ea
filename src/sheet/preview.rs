use teloxide::utils::html;

use super::payload::{ParsedPayload, RowRecord};

/// Rows shown in the reply; anything past this is counted but not rendered.
pub const PREVIEW_ROWS: usize = 5;

#[derive(Debug, PartialEq)]
pub struct Reply {
    pub text: String,
    pub clear_keyboard: bool,
}

/// Turn one Mini App submission into the reply sent back to the chat.
///
/// Never fails: unparseable payloads degrade to a zero-count reply and a
/// row that does not validate is dropped from the preview. Same input
/// always produces the same reply.
pub fn interpret(data: &str) -> Reply {
    let payload = ParsedPayload::parse(data);
    let count = payload.count();

    let preview = payload
        .rows()
        .iter()
        .take(PREVIEW_ROWS)
        .filter_map(|value| match RowRecord::try_from(value) {
            Ok(row) => Some(render_row(&row)),
            Err(err) => {
                tracing::warn!(err = %err, "Dropping row from preview");

                None
            },
        })
        .collect::<Vec<_>>();

    Reply {
        text: format!("<b>Got {count} row(s)</b>\n{}", preview.join("\n")),
        clear_keyboard: true,
    }
}

fn render_row(row: &RowRecord) -> String {
    format!(
        "• #{id} {item} x{qty} = ${total:.2}",
        id = html::escape(&row.id),
        item = html::escape(&row.item),
        qty = row.qty,
        total = row.total,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_rows_preview() {
        let reply = interpret(
            r#"{"rows":[{"id":1,"item":"Pen","qty":2,"total":1.5},{"id":2,"item":"Cup","qty":1,"total":4.0}]}"#,
        );

        assert_eq!(
            reply.text,
            "<b>Got 2 row(s)</b>\n• #1 Pen x2 = $1.50\n• #2 Cup x1 = $4.00"
        );
        assert!(reply.clear_keyboard);
    }

    #[test]
    fn test_preview_keeps_at_most_five_rows_in_order() {
        let rows = (1..=7)
            .map(|n| format!(r#"{{"id":{n},"item":"Item {n}","qty":1,"total":{n}}}"#))
            .collect::<Vec<_>>()
            .join(",");

        let reply = interpret(&format!(r#"{{"rows":[{rows}]}}"#));

        let lines = reply.text.lines().collect::<Vec<_>>();

        // Heading counts all seven, body shows the first five
        assert_eq!(lines[0], "<b>Got 7 row(s)</b>");
        assert_eq!(lines.len(), 1 + PREVIEW_ROWS);
        assert_eq!(lines[1], "• #1 Item 1 x1 = $1.00");
        assert_eq!(lines[5], "• #5 Item 5 x1 = $5.00");
    }

    #[test]
    fn test_explicit_count_with_empty_rows() {
        let reply = interpret(r#"{"count":10,"rows":[]}"#);

        assert_eq!(reply.text, "<b>Got 10 row(s)</b>\n");
    }

    #[test]
    fn test_raw_fallback_reply() {
        let reply = interpret("not-json");

        assert_eq!(reply.text, "<b>Got 0 row(s)</b>\n");
        assert!(reply.clear_keyboard);
    }

    #[test]
    fn test_invalid_row_is_skipped_not_fatal() {
        let reply = interpret(
            r#"{"rows":[
                {"id":1,"item":"Pen","qty":2,"total":1.5},
                {"id":2,"item":"Cup"},
                {"id":3,"item":"Mug","qty":1,"total":2.0}
            ]}"#,
        );

        // The bad row drops out, its neighbours and the count survive
        assert_eq!(
            reply.text,
            "<b>Got 3 row(s)</b>\n• #1 Pen x2 = $1.50\n• #3 Mug x1 = $2.00"
        );
    }

    #[test]
    fn test_item_is_html_escaped() {
        let reply =
            interpret(r#"{"rows":[{"id":1,"item":"Tom & <Jerry>","qty":1,"total":1.0}]}"#);

        assert_eq!(
            reply.text,
            "<b>Got 1 row(s)</b>\n• #1 Tom &amp; &lt;Jerry&gt; x1 = $1.00"
        );
    }

    #[test]
    fn test_fractional_qty_renders_as_given() {
        let reply = interpret(r#"{"rows":[{"id":1,"item":"Rope","qty":2.5,"total":5.0}]}"#);

        assert_eq!(reply.text, "<b>Got 1 row(s)</b>\n• #1 Rope x2.5 = $5.00");
    }

    // Money uses Rust's default float formatting: round to nearest against
    // the exact binary value, ties to even.
    #[test]
    fn test_money_integer_total() {
        let reply = interpret(r#"{"rows":[{"id":1,"item":"A","qty":1,"total":3}]}"#);

        assert_eq!(reply.text, "<b>Got 1 row(s)</b>\n• #1 A x1 = $3.00");
    }

    #[test]
    fn test_money_tie_rounds_to_even() {
        // 0.125 and 0.375 are exact in binary, so these are true ties
        let reply = interpret(
            r#"{"rows":[
                {"id":1,"item":"A","qty":1,"total":0.125},
                {"id":2,"item":"B","qty":1,"total":0.375}
            ]}"#,
        );

        assert_eq!(
            reply.text,
            "<b>Got 2 row(s)</b>\n• #1 A x1 = $0.12\n• #2 B x1 = $0.38"
        );
    }

    #[test]
    fn test_money_near_tie_rounds_down() {
        // 3.005 as a double is 3.00499..., below the tie
        let reply = interpret(r#"{"rows":[{"id":1,"item":"A","qty":1,"total":3.005}]}"#);

        assert_eq!(reply.text, "<b>Got 1 row(s)</b>\n• #1 A x1 = $3.00");
    }

    #[test]
    fn test_interpret_is_deterministic() {
        let data = r#"{"rows":[{"id":1,"item":"Pen","qty":2,"total":1.5}]}"#;

        assert_eq!(interpret(data), interpret(data));
    }
}
