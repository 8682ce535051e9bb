use std::rc::Rc;

use cursive::{
    view::Nameable,
    views::{Checkbox, EditView, TextView},
};
use passgan::{
    breach::BreachResult,
    generator::Password,
    strength::{Strength, StrengthLabel},
};

use crate::helpers::{
    breach_line, get_value_from_input, group_digits, history_label, is_checkbox_checked,
    set_status, strength_line,
};

#[test]
fn test_get_value_from_input() {
    let mut siv = cursive::default();

    let ev = EditView::new()
        .content("unit test content")
        .with_name("input");

    siv.add_layer(ev);

    assert_eq!(
        Some(Rc::new(String::from("unit test content"))),
        get_value_from_input(&mut siv, "input")
    );
}

#[test]
fn get_value_from_missing_input() {
    let mut siv = cursive::default();

    assert_eq!(None, get_value_from_input(&mut siv, "input"));
}

#[test]
fn is_checkbox_checked_false() {
    let mut siv = cursive::default();
    siv.add_layer(Checkbox::new().with_name("unit_test"));

    assert!(!is_checkbox_checked(&mut siv, "unit_test"));
}

#[test]
fn is_checkbox_checked_true() {
    let mut siv = cursive::default();
    let mut c_b = Checkbox::new();
    c_b.set_checked(true);
    siv.add_layer(c_b.with_name("unit_test"));

    assert!(is_checkbox_checked(&mut siv, "unit_test"));
}

#[test]
fn is_checkbox_checked_missing() {
    let mut siv = cursive::default();

    assert!(!is_checkbox_checked(&mut siv, "unit_test"));
}

#[test]
fn set_status_updates_status_bar() {
    let mut siv = cursive::default();
    siv.add_layer(TextView::new("").with_name("status_bar"));

    set_status(&mut siv, "Copied");

    let content = siv
        .call_on_name("status_bar", |l: &mut TextView| {
            l.get_content().source().to_owned()
        })
        .unwrap();
    assert_eq!("Copied", content);
}

#[test]
fn strength_line_empty() {
    assert_eq!("[--------------------]", strength_line(None));
}

#[test]
fn strength_line_medium() {
    let line = strength_line(Some(Strength {
        score: 50,
        label: StrengthLabel::Medium,
    }));

    assert_eq!("[##########----------]  50 Medium", line);
}

#[test]
fn strength_line_full() {
    let line = strength_line(Some(Strength {
        score: 100,
        label: StrengthLabel::Strong,
    }));

    assert_eq!("[####################] 100 Strong", line);
}

#[test]
fn group_digits_small_and_large() {
    assert_eq!("0", group_digits(0));
    assert_eq!("999", group_digits(999));
    assert_eq!("1 000", group_digits(1000));
    assert_eq!("9 659 365", group_digits(9659365));
}

#[test]
fn breach_line_states() {
    assert_eq!("", breach_line(None, false));
    assert_eq!("Checking...", breach_line(Some(BreachResult { count: 3 }), true));
    assert_eq!(
        "Not found in any known breach",
        breach_line(Some(BreachResult { count: 0 }), false)
    );
    assert_eq!(
        "Found in 12 345 breaches, don't use this password",
        breach_line(Some(BreachResult { count: 12345 }), false)
    );
}

#[test]
fn history_label_is_one_based() {
    assert_eq!(" 1  abc", history_label(0, &Password::from("abc")));
    assert_eq!("10  abc", history_label(9, &Password::from("abc")));
}
