//! Contact masking. Redacts email and phone for viewers without the pro plan.

use serde::{Deserialize, Serialize};

const MASK: char = '*';

/// Viewer access tier, resolved from the users database.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Unauthenticated,
    Basic,
    Pro,
}

impl Role {
    /// Maps the users database `role` select. Anything other than "pro" is a
    /// basic plan, including an unset role.
    pub fn from_directory_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("pro") {
            Role::Pro
        } else {
            Role::Basic
        }
    }

    pub fn is_pro(self) -> bool {
        self == Role::Pro
    }
}

/// Keeps the first character of the local part and the whole domain:
/// `john.doe@example.com` becomes `j*******@example.com`. At least one
/// character is always hidden, so `a@x.com` becomes `a*@x.com`.
pub fn mask_email(email: &str, role: Role) -> String {
    if role.is_pro() || email.is_empty() {
        return email.to_string();
    }
    match email.split_once('@') {
        Some((local, domain)) => format!("{}@{domain}", mask_tail(local)),
        None => mask_tail(email),
    }
}

fn mask_tail(value: &str) -> String {
    let mut chars = value.chars();
    let first = chars.next();
    let hidden = chars.count().max(1);
    first
        .into_iter()
        .chain(std::iter::repeat(MASK).take(hidden))
        .collect()
}

/// Replaces all but the trailing digits with `*`, keeping separators:
/// `+91 98765 43210` becomes `+** ***** *3210`.
pub fn mask_phone(phone: &str, role: Role) -> String {
    if role.is_pro() {
        return phone.to_string();
    }
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    let keep = match digits {
        0..=4 => 0,
        5..=8 => 2,
        _ => 4,
    };
    let mut seen = 0;
    phone
        .chars()
        .map(|c| {
            if !c.is_ascii_digit() {
                return c;
            }
            seen += 1;
            if seen > digits - keep {
                c
            } else {
                MASK
            }
        })
        .collect()
}
