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

use cursive::direction::Orientation;
use cursive::event::{Event, Key};
use cursive::traits::*;
use cursive::view::View;
use cursive::views::{
    Button, Checkbox, Dialog, DummyView, EditView, LinearLayout, SelectView, SliderView,
    TextView,
};
use cursive::Cursive;

use std::process;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use log::{debug, error, info};

use passgan::breach::{self, BreachResult, HttpRangeClient, RangeClient};
use passgan::clipboard::SystemClipboard;
use passgan::generator::{GeneratorConfig, MAX_LENGTH, MIN_LENGTH};
use passgan::session::{CheckOutcome, CheckTicket, Session};
use passgan::settings::{self, Settings};
use zeroize::Zeroizing;

mod helpers;

type SessionType = Arc<Mutex<Session>>;

/// Everything the callbacks need, cheap to clone into each of them.
#[derive(Clone)]
struct Context {
    session: SessionType,
    client: Arc<dyn RangeClient + Send + Sync>,
    clipboard_clear_after: Option<Duration>,
}

const CLASS_CHECKBOXES: [(&str, &str); 4] = [
    ("use_upper", "Uppercase (A-Z)"),
    ("use_lower", "Lowercase (a-z)"),
    ("use_digits", "Digits (0-9)"),
    ("use_symbols", "Symbols (!@#$%^&*)"),
];

fn length_label(length: usize) -> String {
    format!("Length: {}", length)
}

/// Reads the generator options from the widgets.
fn generator_config(ui: &mut Cursive) -> GeneratorConfig {
    let length = ui
        .call_on_name("length", |s: &mut SliderView| s.get_value() + MIN_LENGTH)
        .unwrap_or(passgan::generator::DEFAULT_LENGTH);

    GeneratorConfig {
        length,
        use_upper: helpers::is_checkbox_checked(ui, "use_upper"),
        use_lower: helpers::is_checkbox_checked(ui, "use_lower"),
        use_digits: helpers::is_checkbox_checked(ui, "use_digits"),
        use_symbols: helpers::is_checkbox_checked(ui, "use_symbols"),
    }
}

/// Redraws every view that shows session state.
fn refresh(ui: &mut Cursive, session: &Session) {
    let password = session
        .password()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_default();
    ui.call_on_name("password", |l: &mut TextView| {
        l.set_content(password);
    });

    let strength = helpers::strength_line(session.strength());
    ui.call_on_name("strength", |l: &mut TextView| {
        l.set_content(strength);
    });

    ui.call_on_name("history", |l: &mut SelectView<usize>| {
        l.clear();
        for (i, p) in session.history().iter().enumerate() {
            l.add_item(helpers::history_label(i, p), i);
        }
    });

    let breach = helpers::breach_line(session.breach(), session.is_checking());
    ui.call_on_name("breach_result", |l: &mut TextView| {
        l.set_content(breach);
    });
}

fn generate(ui: &mut Cursive, ctx: &Context) {
    let config = generator_config(ui);
    let mut session = ctx.session.lock().unwrap();
    session.set_config(config);

    if let Err(err) = session.generate() {
        helpers::errorbox(ui, &err);
        return;
    }
    refresh(ui, &session);
    helpers::set_status(ui, "Generated a new password");
}

fn copy(ui: &mut Cursive, ctx: &Context) {
    let mut clipboard = SystemClipboard::new(ctx.clipboard_clear_after);
    let res = ctx.session.lock().unwrap().copy_current(&mut clipboard);

    match res {
        Ok(()) => helpers::set_status(ui, &copied_message(ctx.clipboard_clear_after)),
        Err(err) => helpers::errorbox(ui, &err),
    }
}

fn copy_history(ui: &mut Cursive, ctx: &Context, index: usize) {
    let mut clipboard = SystemClipboard::new(ctx.clipboard_clear_after);
    let res = ctx.session.lock().unwrap().copy_history(index, &mut clipboard);

    match res {
        Ok(()) => helpers::set_status(ui, &copied_message(ctx.clipboard_clear_after)),
        Err(err) => helpers::errorbox(ui, &err),
    }
}

fn copied_message(clear_after: Option<Duration>) -> String {
    match clear_after {
        Some(d) => format!("Copied password to copy buffer for {} seconds", d.as_secs()),
        None => "Copied password to copy buffer".to_owned(),
    }
}

fn check(ui: &mut Cursive, ctx: &Context) {
    let candidate = Zeroizing::new(
        helpers::get_value_from_input(ui, "breach_input")
            .map(|c| c.to_string())
            .unwrap_or_default(),
    );

    let ticket = {
        let mut session = ctx.session.lock().unwrap();
        match session.begin_check(&candidate) {
            Ok(ticket) => {
                refresh(ui, &session);
                ticket
            }
            Err(err) => {
                helpers::errorbox(ui, &err);
                return;
            }
        }
    };

    let client = ctx.client.clone();
    let session = ctx.session.clone();
    let cb_sink = ui.cb_sink().clone();
    thread::spawn(move || {
        let outcome = breach::check(&*client, &candidate);
        // fails when the ui is gone, the outcome is dropped with it
        let sent = cb_sink.send(Box::new(move |ui: &mut Cursive| {
            finish_check(ui, &session, ticket, outcome);
        }));
        if sent.is_err() {
            info!("ui closed before the breach check finished");
        }
    });
}

fn finish_check(
    ui: &mut Cursive,
    session: &SessionType,
    ticket: CheckTicket,
    outcome: passgan::Result<BreachResult>,
) {
    let mut session = session.lock().unwrap();

    match session.finish_check(ticket, outcome) {
        CheckOutcome::Completed(result) => {
            refresh(ui, &session);
            if result.is_compromised() {
                helpers::set_status(ui, "Password is compromised!");
            } else {
                helpers::set_status(ui, "Password looks safe");
            }
        }
        CheckOutcome::Failed(err) => {
            refresh(ui, &session);
            helpers::errorbox(ui, &err);
        }
        CheckOutcome::Discarded => {}
    }
}

fn generator_panel(ctx: &Context, config: &GeneratorConfig) -> impl View {
    let mut classes = LinearLayout::new(Orientation::Vertical);
    let enabled = [
        config.use_upper,
        config.use_lower,
        config.use_digits,
        config.use_symbols,
    ];
    for ((name, label), checked) in CLASS_CHECKBOXES.iter().zip(enabled) {
        let mut checkbox = Checkbox::new();
        checkbox.set_checked(checked);
        classes.add_child(
            LinearLayout::new(Orientation::Horizontal)
                .child(checkbox.with_name(*name))
                .child(TextView::new(format!(" {}", label))),
        );
    }

    let length = SliderView::horizontal(MAX_LENGTH - MIN_LENGTH + 1)
        .value(config.length - MIN_LENGTH)
        .on_change(|ui, value| {
            ui.call_on_name("length_label", |l: &mut TextView| {
                l.set_content(length_label(value + MIN_LENGTH));
            });
        })
        .with_name("length");

    let buttons = LinearLayout::new(Orientation::Horizontal)
        .child(Button::new("Generate", {
            let ctx = ctx.clone();
            move |ui: &mut Cursive| generate(ui, &ctx)
        }))
        .child(DummyView)
        .child(Button::new("Copy", {
            let ctx = ctx.clone();
            move |ui: &mut Cursive| copy(ui, &ctx)
        }));

    Dialog::around(
        LinearLayout::new(Orientation::Vertical)
            .child(TextView::new("").with_name("password"))
            .child(TextView::new(helpers::strength_line(None)).with_name("strength"))
            .child(DummyView)
            .child(TextView::new(length_label(config.length)).with_name("length_label"))
            .child(length)
            .child(DummyView)
            .child(classes)
            .child(DummyView)
            .child(buttons),
    )
    .title("PassGan")
}

fn breach_panel(ctx: &Context) -> impl View {
    let input = EditView::new()
        .secret()
        .on_submit({
            let ctx = ctx.clone();
            move |ui: &mut Cursive, _: &str| check(ui, &ctx)
        })
        .with_name("breach_input")
        .full_width();

    Dialog::around(
        LinearLayout::new(Orientation::Vertical)
            .child(TextView::new("Check a password against known breaches"))
            .child(input)
            .child(Button::new("Check", {
                let ctx = ctx.clone();
                move |ui: &mut Cursive| check(ui, &ctx)
            }))
            .child(TextView::new("").with_name("breach_result")),
    )
    .title("Breach check")
}

fn history_panel(ctx: &Context) -> impl View {
    let history = SelectView::<usize>::new()
        .on_submit({
            let ctx = ctx.clone();
            move |ui: &mut Cursive, index: &usize| copy_history(ui, &ctx, *index)
        })
        .with_name("history")
        .min_height(10);

    Dialog::around(history).title("History (enter copies)")
}

/// Puts all views on `ui` and fills them from the session.
fn build_ui(ui: &mut Cursive, ctx: &Context) {
    let config = *ctx.session.lock().unwrap().config();

    ui.add_layer(
        LinearLayout::new(Orientation::Vertical)
            .child(
                LinearLayout::new(Orientation::Horizontal)
                    .child(generator_panel(ctx, &config).fixed_width(48))
                    .child(
                        LinearLayout::new(Orientation::Vertical)
                            .child(breach_panel(ctx))
                            .child(history_panel(ctx))
                            .min_width(60),
                    ),
            )
            .child(
                LinearLayout::new(Orientation::Horizontal)
                    .child(TextView::new(
                        "ctrl-g: Generate | ctrl-y: Copy | ctrl-b: Check | esc: Quit | ",
                    ))
                    .child(TextView::new("").with_name("status_bar"))
                    .full_width(),
            ),
    );

    ui.add_global_callback(Event::CtrlChar('g'), {
        let ctx = ctx.clone();
        move |ui: &mut Cursive| generate(ui, &ctx)
    });
    ui.add_global_callback(Event::CtrlChar('y'), {
        let ctx = ctx.clone();
        move |ui: &mut Cursive| copy(ui, &ctx)
    });
    ui.add_global_callback(Event::CtrlChar('b'), |ui| {
        if let Err(err) = ui.focus_name("breach_input") {
            debug!("couldn't focus the breach input: {:?}", err);
        }
    });
    ui.add_global_callback(Event::Key(Key::Esc), |s| s.quit());

    refresh(ui, &ctx.session.lock().unwrap());
}

fn help() {
    println!("A password generator and breach checker, configured through $XDG_CONFIG_HOME/passgan/settings.toml\n\nusage: passgan [-h|--help]");
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.len() {
        1 => (),
        2 if args[1] == "-h" || args[1] == "--help" => {
            help();
            process::exit(0);
        }
        _ => {
            eprintln!("Unknown argument, usage: passgan [-h|--help]");
            process::exit(1);
        }
    }

    let settings: Settings = match settings::load() {
        Ok(s) => s,
        Err(err) => {
            eprintln!("Error reading settings: {}", err);
            process::exit(1);
        }
    };

    let client = match HttpRangeClient::new(
        &settings.breach.endpoint,
        settings.breach.timeout,
        settings.breach.add_padding,
    ) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("Error {}", err);
            process::exit(1);
        }
    };

    let session = match Session::new(settings.generator) {
        Ok(s) => s,
        Err(err) => {
            eprintln!("Error {}", err);
            process::exit(1);
        }
    };

    let ctx = Context {
        session: Arc::new(Mutex::new(session)),
        client: Arc::new(client),
        clipboard_clear_after: settings.clipboard_clear_after,
    };

    let mut ui = cursive::default();
    if let Err(err) = ui.load_toml(include_str!("../res/style.toml")) {
        error!("failed to load the theme: {:?}", err);
    }

    build_ui(&mut ui, &ctx);
    ui.run();

    ctx.session.lock().unwrap().cancel_check();
}

#[cfg(test)]
#[path = "tests/main.rs"]
mod main_tests;
