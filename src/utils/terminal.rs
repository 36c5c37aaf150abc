//! Terminal output sanitization for imported cell values
//!
//! Record values come straight from user-supplied CSV/JSON files and are printed by the
//! `filter` command and drawn by the browser. They may contain ANSI escape sequences or
//! control characters that would move the cursor or restyle the terminal, so every value
//! passes through [`sanitize_cell`] before it reaches the screen. Exported files are not
//! sanitized; they keep the stored values verbatim.

/// Make a record value safe to show as a single table cell.
///
/// Removes ANSI CSI sequences (`ESC [ ... letter`) and control characters, and turns
/// line breaks and tabs into single spaces so a cell never spans rows.
///
/// # Examples
///
/// ```
/// use delivery_ledger::utils::terminal::sanitize_cell;
///
/// assert_eq!(sanitize_cell("\x1b[31mAcme\x1b[0m"), "Acme");
/// assert_eq!(sanitize_cell("two\nlines"), "two lines");
/// ```
pub fn sanitize_cell(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            if chars.peek() == Some(&'[') {
                chars.next();
                // CSI sequences end at the first letter
                for next_ch in chars.by_ref() {
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
            }
            continue;
        }

        match ch {
            '\n' | '\t' => result.push(' '),
            // "\r\n" becomes one space via the '\n'
            '\r' => {
                if chars.peek() != Some(&'\n') {
                    result.push(' ');
                }
            }
            c if c.is_control() => {}
            c => result.push(c),
        }
    }

    result
}
