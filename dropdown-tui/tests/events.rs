use dropdown_lib::{Dropdown, DropdownConfig, Item, Msg, PointerTarget, ScrollRequest};
use dropdown_tui::widget::{DropdownView, HitMap, Region, WHEEL_ROWS, translate};
use dropdown_tui::{App, Buffer, Event, Key, Modifiers, MouseButton, Scale, sample};
use serde_json::json;

fn people() -> Vec<Item> {
    ["Ann", "Bob", "Cara"]
        .iter()
        .enumerate()
        .filter_map(|(i, name)| json!({"id": i + 1, "name": name}).as_object().cloned())
        .collect()
}

fn config() -> DropdownConfig {
    DropdownConfig::default().with_display_key("name")
}

fn frame(dropdown: &mut Dropdown) -> HitMap {
    let view = DropdownView::new(Scale::for_config(dropdown.config())).at(2, 1);
    let mut buf = Buffer::new(60, 30);
    let metrics = view.metrics(dropdown.config(), buf.area());
    dropdown.update(Msg::Resized(metrics));
    view.render(dropdown, &mut buf)
}

fn click(x: u16, y: u16) -> Event {
    Event::MouseDown {
        x,
        y,
        button: MouseButton::Left,
    }
}

fn key(key: Key) -> Event {
    Event::Key {
        key,
        modifiers: Modifiers::new(),
    }
}

// ============================================================================
// Hit map
// ============================================================================

#[test]
fn test_hit_map_topmost_wins() {
    let mut hits = HitMap::new();
    hits.push(dropdown_tui::Rect::new(0, 0, 10, 10), Region::Panel);
    hits.push(dropdown_tui::Rect::new(2, 2, 4, 1), Region::Row(0));

    assert_eq!(hits.hit(3, 2), Some(Region::Row(0)));
    assert_eq!(hits.hit(3, 3), Some(Region::Panel));
    assert_eq!(hits.hit(20, 20), None);
}

#[test]
fn test_hit_map_skips_empty_rects() {
    let mut hits = HitMap::new();
    hits.push(dropdown_tui::Rect::new(0, 0, 0, 5), Region::Input);
    assert!(hits.is_empty());
}

// ============================================================================
// Mouse
// ============================================================================

#[test]
fn test_click_outside() {
    let mut dropdown = Dropdown::new(config(), people());
    let hits = frame(&mut dropdown);

    assert_eq!(
        translate(&click(0, 29), &dropdown, &hits),
        vec![Msg::PointerDown(PointerTarget::Outside)]
    );
}

#[test]
fn test_click_input_toggles() {
    let mut dropdown = Dropdown::new(config(), people());
    let hits = frame(&mut dropdown);

    let msgs = translate(&click(10, 2), &dropdown, &hits);
    assert_eq!(
        msgs,
        vec![Msg::PointerDown(PointerTarget::Input), Msg::InputClicked]
    );

    for msg in msgs {
        dropdown.update(msg);
    }
    assert!(dropdown.is_open());
}

#[test]
fn test_click_row_toggles_item() {
    let mut dropdown = Dropdown::new(config(), people());
    dropdown.open();
    let hits = frame(&mut dropdown);

    let msgs = translate(&click(10, 8), &dropdown, &hits);
    assert_eq!(
        msgs,
        vec![
            Msg::PointerDown(PointerTarget::Panel),
            Msg::ToggleItem {
                index: 1,
                selected: true
            },
        ]
    );
    for msg in msgs {
        dropdown.update(msg);
    }
    assert!(dropdown.is_row_selected(1));
    assert!(dropdown.is_open());

    let hits = frame(&mut dropdown);
    assert_eq!(
        translate(&click(10, 8), &dropdown, &hits)[1],
        Msg::ToggleItem {
            index: 1,
            selected: false
        }
    );
}

#[test]
fn test_click_select_all() {
    let mut dropdown = Dropdown::new(config(), people());
    dropdown.open();
    let hits = frame(&mut dropdown);

    assert_eq!(
        translate(&click(10, 5), &dropdown, &hits),
        vec![
            Msg::PointerDown(PointerTarget::Panel),
            Msg::ToggleSelectAll(true)
        ]
    );

    dropdown.toggle_select_all(true);
    let hits = frame(&mut dropdown);
    assert_eq!(
        translate(&click(10, 5), &dropdown, &hits)[1],
        Msg::ToggleSelectAll(false)
    );
}

#[test]
fn test_click_clear_chip() {
    let mut dropdown = Dropdown::new(config(), people());
    dropdown.toggle_item(0, true);
    let hits = frame(&mut dropdown);

    let chip = hits.rect_of(Region::ClearSelection).unwrap();
    let msgs = translate(&click(chip.x + 1, chip.y), &dropdown, &hits);
    assert_eq!(
        msgs,
        vec![Msg::PointerDown(PointerTarget::Outside), Msg::ClearSelection]
    );

    for msg in msgs {
        dropdown.update(msg);
    }
    assert!(dropdown.selection().is_empty());
}

#[test]
fn test_clear_chip_closes_open_panel_and_drops_query() {
    let mut dropdown = Dropdown::new(config(), people());
    dropdown.toggle_item(0, true);
    dropdown.set_query("b");
    assert!(dropdown.is_open());
    let hits = frame(&mut dropdown);

    let chip = hits.rect_of(Region::ClearSelection).unwrap();
    for msg in translate(&click(chip.x + 1, chip.y), &dropdown, &hits) {
        dropdown.update(msg);
    }

    assert!(!dropdown.is_open());
    assert_eq!(dropdown.query(), "");
    assert!(dropdown.selection().is_empty());
}

#[test]
fn test_right_click_only_reports_target() {
    let mut dropdown = Dropdown::new(config(), people());
    let hits = frame(&mut dropdown);

    let event = Event::MouseDown {
        x: 10,
        y: 2,
        button: MouseButton::Right,
    };
    assert_eq!(
        translate(&event, &dropdown, &hits),
        vec![Msg::PointerDown(PointerTarget::Input)]
    );
}

#[test]
fn test_wheel_over_panel_scrolls() {
    let mut dropdown = Dropdown::new(config(), people());
    dropdown.open();
    let hits = frame(&mut dropdown);

    let down = Event::Scroll {
        x: 10,
        y: 8,
        delta_y: 1,
    };
    let up = Event::Scroll {
        x: 10,
        y: 8,
        delta_y: -1,
    };
    assert_eq!(
        translate(&down, &dropdown, &hits),
        vec![Msg::Scroll(ScrollRequest::Rows(WHEEL_ROWS))]
    );
    assert_eq!(
        translate(&up, &dropdown, &hits),
        vec![Msg::Scroll(ScrollRequest::Rows(-WHEEL_ROWS))]
    );

    let outside = Event::Scroll {
        x: 55,
        y: 25,
        delta_y: 1,
    };
    assert!(translate(&outside, &dropdown, &hits).is_empty());
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_typing_appends_to_query() {
    let mut dropdown = Dropdown::new(config(), people());
    let hits = frame(&mut dropdown);

    assert_eq!(
        translate(&key(Key::Char('a')), &dropdown, &hits),
        vec![Msg::QueryChanged("a".to_string())]
    );

    dropdown.set_query("an");
    assert_eq!(
        translate(&key(Key::Backspace), &dropdown, &hits),
        vec![Msg::QueryChanged("a".to_string())]
    );
}

#[test]
fn test_backspace_on_empty_input() {
    let mut dropdown = Dropdown::new(config(), people());
    let hits = frame(&mut dropdown);
    assert!(translate(&key(Key::Backspace), &dropdown, &hits).is_empty());
}

#[test]
fn test_typing_edits_selected_label_in_single_mode() {
    let mut dropdown = Dropdown::new(config().with_multiple_select(false), people());
    dropdown.toggle_item(1, true);
    let hits = frame(&mut dropdown);

    assert_eq!(
        translate(&key(Key::Char('x')), &dropdown, &hits),
        vec![Msg::QueryChanged("Bobx".to_string())]
    );
}

#[test]
fn test_ctrl_keys_are_not_typed() {
    let mut dropdown = Dropdown::new(config(), people());
    let hits = frame(&mut dropdown);

    let event = Event::Key {
        key: Key::Char('a'),
        modifiers: Modifiers::ctrl(),
    };
    assert!(translate(&event, &dropdown, &hits).is_empty());
}

#[test]
fn test_navigation_keys_scroll_when_open() {
    let mut dropdown = Dropdown::new(config(), people());
    let hits = frame(&mut dropdown);
    assert!(translate(&key(Key::Down), &dropdown, &hits).is_empty());

    dropdown.open();
    let hits = frame(&mut dropdown);
    assert_eq!(
        translate(&key(Key::Down), &dropdown, &hits),
        vec![Msg::Scroll(ScrollRequest::Rows(1))]
    );
    assert_eq!(
        translate(&key(Key::PageUp), &dropdown, &hits),
        vec![Msg::Scroll(ScrollRequest::PageUp)]
    );
    assert_eq!(
        translate(&key(Key::End), &dropdown, &hits),
        vec![Msg::Scroll(ScrollRequest::End)]
    );
}

#[test]
fn test_escape_acts_as_outside_click() {
    let mut dropdown = Dropdown::new(config(), people());
    dropdown.set_query("bo");
    let hits = frame(&mut dropdown);

    let msgs = translate(&key(Key::Escape), &dropdown, &hits);
    assert_eq!(msgs, vec![Msg::PointerDown(PointerTarget::Outside)]);
    for msg in msgs {
        dropdown.update(msg);
    }
    assert!(!dropdown.is_open());
    assert_eq!(dropdown.query(), "");
}

#[test]
fn test_resize_translates_to_nothing() {
    let mut dropdown = Dropdown::new(config(), people());
    let hits = frame(&mut dropdown);
    let event = Event::Resize {
        width: 80,
        height: 24,
    };
    assert!(translate(&event, &dropdown, &hits).is_empty());
}

// ============================================================================
// App
// ============================================================================

fn app_with(dropdown: Dropdown) -> (App, Buffer) {
    let mut app = App::new(dropdown);
    app.handle(Event::Resize {
        width: 60,
        height: 30,
    });
    (app, Buffer::new(60, 30))
}

#[test]
fn test_app_click_flow() {
    let (mut app, mut buf) = app_with(Dropdown::new(config(), people()));

    app.draw(&mut buf);
    let input = app.view().input_rect(app.dropdown().config(), buf.area());
    assert_eq!(app.hits().rect_of(Region::Input), Some(input));
    app.handle(click(input.x + 1, input.y + 1));
    assert!(app.dropdown().is_open());

    buf.clear();
    app.draw(&mut buf);
    app.handle(click(10, 7));
    assert_eq!(app.dropdown().selected_items().len(), 1);

    app.handle(click(0, 29));
    assert!(!app.dropdown().is_open());
}

#[test]
fn test_app_quit_keys() {
    let (mut app, _) = app_with(Dropdown::new(config(), people()));
    app.handle(Event::Key {
        key: Key::Char('q'),
        modifiers: Modifiers::ctrl(),
    });
    assert!(!app.is_running());

    let (mut app, _) = app_with(Dropdown::new(config(), people()));
    app.handle(Event::Key {
        key: Key::Char('c'),
        modifiers: Modifiers::ctrl(),
    });
    assert!(!app.is_running());
}

#[test]
fn test_app_resize_remeasures() {
    let (mut app, _) = app_with(Dropdown::new(config(), people()));
    assert_eq!(app.dropdown().dimensions().height, 300.0);

    app.handle(Event::Resize {
        width: 60,
        height: 8,
    });
    assert_eq!(app.dropdown().dimensions().height, 200.0);
}

#[test]
fn test_app_reports_rendered_rows_once() {
    let config = DropdownConfig::default().with_chunk_size(5);
    let (mut app, mut buf) = app_with(Dropdown::new(config, sample::customers(12)));

    assert!(!app.report_rendered());

    app.handle(key(Key::Enter));
    app.draw(&mut buf);
    assert!(app.report_rendered());
    assert_eq!(app.dropdown().window().len(), 10);

    // The new range no longer reaches the end of the view.
    assert!(!app.report_rendered());
    assert!(!app.report_rendered());
    assert_eq!(app.dropdown().window().len(), 10);
}

#[test]
fn test_app_scroll_to_end_loads_more() {
    let config = DropdownConfig::default().with_chunk_size(10);
    let (mut app, mut buf) = app_with(Dropdown::new(config, sample::customers(25)));

    app.handle(key(Key::Enter));
    app.draw(&mut buf);
    assert!(!app.report_rendered());

    app.handle(key(Key::End));
    assert!(app.report_rendered());
    assert_eq!(app.dropdown().window().len(), 20);
}
