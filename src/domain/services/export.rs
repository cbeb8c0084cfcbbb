use crate::domain::models::{contact::Contact, guest::Guest};

pub const CSV_HEADER: &str = "Imię,Nazwisko,Email,Status,Data zaproszenia";

/// Guest-list CSV for download. Identity columns come from the linked
/// contact, or from the inline fields for synthetic companions.
pub fn guests_to_csv(rows: &[(Guest, Option<Contact>)]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for (guest, contact) in rows {
        let (first, last, email) = match contact {
            Some(c) => (c.first_name.clone(), c.last_name.clone(), c.email.clone()),
            None => (
                guest.first_name.clone().unwrap_or_default(),
                guest.last_name.clone().unwrap_or_default(),
                guest.email.clone().unwrap_or_default(),
            ),
        };

        let fields = [
            first,
            last,
            email,
            guest.status.clone(),
            guest.invited_at.format("%d.%m.%Y %H:%M").to_string(),
        ];
        let line: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }

    out
}

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
