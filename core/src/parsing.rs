/// Header row and accepted records of a comma-separated similarity table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub skipped_rows: usize,
}

/// Result of checking one logical row against the header.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Accepted(Vec<String>),
    Skipped { expected: usize, found: usize },
}

/// A single accepted row, addressable by header name.
pub struct Record<'a> {
    headers: &'a [String],
    fields: &'a [String],
}

impl<'a> Record<'a> {
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.headers
            .iter()
            .position(|header| header == column)
            .and_then(|index| self.fields.get(index))
            .map(String::as_str)
    }

    pub fn fields(&self) -> &'a [String] {
        self.fields
    }
}

impl Table {
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == column)
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(|fields| Record {
            headers: &self.headers,
            fields,
        })
    }
}

pub fn parse_table(content: &str) -> Table {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split('\n').map(strip_carriage_return);

    let headers = match lines.next() {
        Some(header_line) => split_fields(header_line),
        None => return Table::default(),
    };

    let mut table = Table {
        headers,
        rows: Vec::new(),
        skipped_rows: 0,
    };
    let mut pending = String::new();

    for line in lines {
        if !pending.is_empty() {
            pending.push('\n');
        }
        pending.push_str(line);

        // An odd quote count means a quoted field continues on the next line
        if count_quotes(&pending) % 2 != 0 {
            continue;
        }

        if pending.trim().is_empty() {
            pending.clear();
            continue;
        }

        match check_row(&pending, table.headers.len()) {
            RowOutcome::Accepted(fields) => table.rows.push(fields),
            RowOutcome::Skipped { .. } => table.skipped_rows += 1,
        }
        pending.clear();
    }

    if !pending.trim().is_empty() {
        // Unterminated quote at end of input
        table.skipped_rows += 1;
    }

    table
}

pub fn check_row(line: &str, header_count: usize) -> RowOutcome {
    let fields = split_fields(line);
    if fields.len() == header_count {
        RowOutcome::Accepted(fields)
    } else {
        RowOutcome::Skipped {
            expected: header_count,
            found: fields.len(),
        }
    }
}

/// Splits one logical record into trimmed fields. A doubled quote inside a
/// quoted section is a literal quote; commas inside quotes do not split.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut inside_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if inside_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => inside_quotes = !inside_quotes,
            ',' if !inside_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_string());
    fields
}

pub fn parse_weight(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(weight) if weight.is_finite() && weight > 0.0 => weight,
        _ => 0.0,
    }
}

fn count_quotes(text: &str) -> usize {
    text.bytes().filter(|&byte| byte == b'"').count()
}

fn strip_carriage_return(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}
