/*  PassGan - a password generator and breach checker
    Copyright (C) 2024 The PassGan authors

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use std::rc::Rc;

use cursive::event::Key;
use cursive::views::{Checkbox, Dialog, EditView, OnEventView, TextView};
use cursive::Cursive;

use passgan::{breach::BreachResult, generator::Password, strength::Strength, Error};

/// Width of the strength bar, one cell per 5 points.
pub const STRENGTH_BAR_WIDTH: usize = 20;

pub fn errorbox(ui: &mut Cursive, err: &Error) {
    let text = match err {
        Error::Network(_) | Error::Parse(_) => format!("Couldn't check the password: {}", err),
        Error::Clipboard(_) => format!("Couldn't copy the password: {}", err),
        _ => format!("{}", err),
    };

    let d = Dialog::around(TextView::new(text))
        .dismiss_button("Ok")
        .title("Error");

    let ev = OnEventView::new(d).on_event(Key::Esc, |s| {
        s.pop_layer();
    });

    ui.add_layer(ev);
}

pub fn set_status(ui: &mut Cursive, message: &str) {
    ui.call_on_name("status_bar", |l: &mut TextView| {
        l.set_content(message);
    });
}

pub fn get_value_from_input(s: &mut Cursive, input_name: &str) -> Option<Rc<String>> {
    s.call_on_name(input_name, |e: &mut EditView| e.get_content())
}

pub fn is_checkbox_checked(ui: &mut Cursive, name: &str) -> bool {
    ui.call_on_name(name, |l: &mut Checkbox| l.is_checked())
        .unwrap_or(false)
}

/// `[##########----------] 50 Medium`, or a placeholder when there is nothing to score.
pub fn strength_line(strength: Option<Strength>) -> String {
    match strength {
        Some(s) => {
            let filled = s.score as usize * STRENGTH_BAR_WIDTH / 100;
            format!(
                "[{}{}] {:>3} {}",
                "#".repeat(filled),
                "-".repeat(STRENGTH_BAR_WIDTH - filled),
                s.score,
                s.label
            )
        }
        None => format!("[{}]", "-".repeat(STRENGTH_BAR_WIDTH)),
    }
}

/// Groups the digits of `n` in threes, `1234567` becomes `1 234 567`.
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

pub fn breach_line(result: Option<BreachResult>, checking: bool) -> String {
    if checking {
        return "Checking...".to_owned();
    }
    match result {
        None => String::new(),
        Some(r) if r.is_compromised() => format!(
            "Found in {} breaches, don't use this password",
            group_digits(r.count)
        ),
        Some(_) => "Not found in any known breach".to_owned(),
    }
}

pub fn history_label(index: usize, password: &Password) -> String {
    format!("{:>2}  {}", index + 1, password.as_str())
}

#[cfg(test)]
#[path = "tests/helpers.rs"]
mod helpers_tests;
