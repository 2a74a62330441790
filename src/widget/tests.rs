use super::*;
use crate::layout::{Layout, Rect, Region};
use crate::modal::{FocusFilterMsg, State};
use bubbletea_rs::{KeyMsg, Model as BubbleTeaModel, MouseMsg, Msg, WindowSizeMsg};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

fn fruits() -> Model {
    Model::new(
        ["Apple", "Banana", "Cherry"],
        Layout::for_size(40, 8).unwrap(),
    )
}

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn mouse(kind: MouseEventKind, x: u16, y: u16) -> Msg {
    Box::new(MouseMsg {
        x,
        y,
        button: kind,
        modifiers: KeyModifiers::NONE,
    })
}

fn click(x: u16, y: u16) -> Msg {
    mouse(MouseEventKind::Down(MouseButton::Left), x, y)
}

fn current_tick(widget: &Model) -> Msg {
    Box::new(FocusFilterMsg {
        id: widget.focus.id(),
        tag: widget.focus.tag(),
    })
}

fn open_and_focus(widget: &mut Model) {
    let _cmd = widget.open_modal();
    let tick = current_tick(widget);
    widget.dispatch(&tick);
    assert!(widget.filter().focused());
}

fn type_text(widget: &mut Model, text: &str) {
    for ch in text.chars() {
        widget.dispatch(&key(KeyCode::Char(ch)));
    }
}

fn plain(s: &str) -> String {
    String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
}

#[test]
fn test_initial_state() {
    let widget = fruits();
    let texts: Vec<&str> = widget.list().items().iter().map(|i| i.text()).collect();
    assert_eq!(texts, vec!["Apple", "Banana", "Cherry"]);
    assert_eq!(widget.state(), State::Closed);
    assert_eq!(widget.selected_value(), "");
    assert!(!widget.filter().focused());
    assert!(!widget.focus_pending());
}

#[test]
fn test_empty_titles() {
    let widget = Model::new(Vec::<String>::new(), Layout::default());
    assert!(widget.list().is_empty());
}

#[test]
fn test_open_and_close_are_idempotent() {
    let mut widget = fruits();
    widget.close_modal();
    widget.close_modal();
    assert!(!widget.is_open());

    let _first = widget.open_modal();
    let _second = widget.open_modal();
    assert!(widget.is_open());

    widget.close_modal();
    widget.close_modal();
    assert!(!widget.is_open());
}

#[test]
fn test_focus_lands_after_tick() {
    let mut widget = fruits();
    let _cmd = widget.open_modal();
    assert!(widget.focus_pending());
    assert!(!widget.filter().focused());

    let tick = current_tick(&widget);
    widget.dispatch(&tick);
    assert!(widget.filter().focused());
    assert!(!widget.focus_pending());
}

#[test]
fn test_close_before_delay_discards_focus() {
    let mut widget = fruits();
    let _cmd = widget.open_modal();
    let stale = current_tick(&widget);
    widget.close_modal();

    widget.dispatch(&stale);
    assert!(!widget.filter().focused());
    assert!(!widget.is_open());
}

#[test]
fn test_reopen_discards_earlier_tick() {
    let mut widget = fruits();
    let _first = widget.open_modal();
    let stale = current_tick(&widget);
    widget.close_modal();
    let _second = widget.open_modal();
    let fresh = current_tick(&widget);

    widget.dispatch(&stale);
    assert!(!widget.filter().focused());
    assert!(widget.focus_pending());

    widget.dispatch(&fresh);
    assert!(widget.filter().focused());
}

#[tokio::test]
async fn test_scheduled_focus_after_close_is_inert() {
    let config = Config::default().with_focus_delay(Duration::from_millis(10));
    let mut widget = Model::with_config(
        ["Apple", "Banana", "Cherry"],
        Layout::for_size(40, 8).unwrap(),
        config,
    );

    let first = widget.open_modal();
    widget.close_modal();
    let second = widget.open_modal();

    let msg = first.await.expect("focus tick");
    widget.dispatch(&msg);
    assert!(!widget.filter().focused());

    let msg = second.await.expect("focus tick");
    widget.dispatch(&msg);
    assert!(widget.filter().focused());
    assert!(widget.is_open());

    widget.close_modal();
    assert!(!widget.filter().focused());
    assert!(!widget.is_open());
}

#[test]
fn test_typing_filters_list() {
    let mut widget = fruits();
    open_and_focus(&mut widget);

    type_text(&mut widget, "AN");
    assert_eq!(widget.filter().value(), "AN");
    assert_eq!(widget.list().visible_texts(), vec!["Banana"]);

    widget.dispatch(&key(KeyCode::Backspace));
    assert_eq!(widget.list().visible_texts(), vec!["Apple", "Banana"]);

    widget.dispatch(&key(KeyCode::Backspace));
    assert_eq!(widget.list().visible_len(), 3);
}

#[test]
fn test_typing_is_ignored_until_focused() {
    let mut widget = fruits();
    let _cmd = widget.open_modal();
    type_text(&mut widget, "zz");
    assert_eq!(widget.filter().value(), "");
    assert_eq!(widget.list().visible_len(), 3);
}

#[test]
fn test_activate_sets_mirror_and_closes() {
    let mut widget = fruits();
    let _cmd = widget.open_modal();
    widget.activate(2);
    assert_eq!(widget.selected_value(), "Cherry");
    assert!(!widget.is_open());
    assert!(!widget.focus_pending());

    widget.activate(0);
    assert_eq!(widget.selected_value(), "Apple");
    assert!(!widget.is_open());

    widget.activate(7);
    assert_eq!(widget.selected_value(), "Apple");
}

#[test]
fn test_enter_chooses_cursor_item() {
    let mut widget = fruits();
    open_and_focus(&mut widget);
    widget.dispatch(&key(KeyCode::Down));
    widget.dispatch(&key(KeyCode::Enter));
    assert_eq!(widget.selected_value(), "Banana");
    assert!(!widget.is_open());
    assert!(!widget.filter().focused());
}

#[test]
fn test_enter_with_no_matches_keeps_dialog_open() {
    let mut widget = fruits();
    open_and_focus(&mut widget);
    type_text(&mut widget, "zzz");
    widget.dispatch(&key(KeyCode::Enter));
    assert!(widget.is_open());
    assert_eq!(widget.selected_value(), "");
}

#[test]
fn test_open_key_only_while_closed() {
    let mut widget = fruits();
    let dispatch = widget.dispatch(&key(KeyCode::Char('/')));
    assert!(dispatch.cmd.is_some());
    assert!(widget.is_open());

    open_and_focus(&mut widget);
    widget.dispatch(&key(KeyCode::Char('/')));
    assert_eq!(widget.filter().value(), "/");
    assert!(widget.is_open());
}

#[test]
fn test_escape_blurs_and_closes() {
    let mut widget = fruits();
    open_and_focus(&mut widget);
    widget.dispatch(&key(KeyCode::Esc));
    assert!(!widget.is_open());
    assert!(!widget.filter().focused());

    let _cmd = widget.open_modal();
    widget.dispatch(&key(KeyCode::Tab));
    assert!(!widget.is_open());
    assert!(!widget.focus_pending());
}

#[test]
fn test_click_on_row_activates_visible_item() {
    let mut widget = fruits();
    open_and_focus(&mut widget);
    type_text(&mut widget, "an");

    // The list starts on row 3 of a 40x8 layout.
    widget.dispatch(&click(5, 3));
    assert_eq!(widget.selected_value(), "Banana");
    assert!(!widget.is_open());
}

#[test]
fn test_click_on_footer_does_nothing() {
    let mut widget = fruits();
    let _cmd = widget.open_modal();
    widget.dispatch(&click(5, 6));
    assert!(widget.is_open());
    assert_eq!(widget.selected_value(), "");
}

#[test]
fn test_click_outside_overlay_closes() {
    let mut widget = fruits();
    open_and_focus(&mut widget);
    widget.dispatch(&click(5, 0));
    assert!(!widget.is_open());
    assert!(!widget.filter().focused());
}

#[test]
fn test_click_on_filter_field_focuses_now() {
    let mut widget = fruits();
    let _cmd = widget.open_modal();
    widget.dispatch(&click(5, 2));
    assert!(widget.filter().focused());
    assert!(!widget.focus_pending());
}

#[test]
fn test_click_on_mirror_opens() {
    let mut widget = fruits();
    let dispatch = widget.dispatch(&click(5, 1));
    assert!(dispatch.cmd.is_some());
    assert!(widget.is_open());
    assert!(widget.focus_pending());
}

#[test]
fn test_drag_from_header_is_prevented() {
    let mut widget = fruits();
    assert!(!widget.dispatch(&click(3, 0)).default_prevented);
    let dispatch = widget.dispatch(&mouse(MouseEventKind::Drag(MouseButton::Left), 3, 5));
    assert!(dispatch.default_prevented);
    assert!(dispatch.cmd.is_none());
    assert!(!widget.is_open());

    widget.dispatch(&mouse(MouseEventKind::Up(MouseButton::Left), 3, 5));
    widget.dispatch(&mouse(MouseEventKind::Down(MouseButton::Right), 3, 5));
    let dispatch = widget.dispatch(&mouse(MouseEventKind::Drag(MouseButton::Right), 3, 0));
    assert!(!dispatch.default_prevented);
}

#[test]
fn test_wheel_scroll_clamps_at_bottom() {
    let titles: Vec<String> = (0..10).map(|i| format!("Title {i}")).collect();
    let mut widget = Model::new(titles, Layout::for_size(40, 8).unwrap());

    // Closed dialogs do not scroll.
    widget.dispatch(&mouse(MouseEventKind::ScrollDown, 5, 4));
    assert_eq!(widget.list().body().scroll_top(), 0);

    let _cmd = widget.open_modal();
    // 10 rows plus the footer in a 5 row body.
    for _ in 0..20 {
        widget.dispatch(&mouse(MouseEventKind::ScrollDown, 5, 4));
    }
    assert_eq!(widget.list().body().scroll_height(), 11);
    assert_eq!(widget.list().body().scroll_top(), 5);

    widget.dispatch(&mouse(MouseEventKind::ScrollUp, 5, 4));
    assert_eq!(widget.list().body().scroll_top(), 4);

    // Outside the body.
    widget.dispatch(&mouse(MouseEventKind::ScrollUp, 5, 0));
    assert_eq!(widget.list().body().scroll_top(), 4);
}

#[test]
fn test_resize_relayouts_or_keeps_layout() {
    let mut widget = fruits();
    let resize: Msg = Box::new(WindowSizeMsg {
        width: 60,
        height: 12,
    });
    widget.dispatch(&resize);
    assert_eq!(widget.layout().get(Region::Header), Rect::new(0, 0, 60, 1));
    assert_eq!(widget.list().body().client_height(), 9);

    let too_small: Msg = Box::new(WindowSizeMsg {
        width: 60,
        height: 2,
    });
    widget.dispatch(&too_small);
    assert_eq!(widget.layout().get(Region::Header), Rect::new(0, 0, 60, 1));
}

#[test]
fn test_custom_layout() {
    let layout = Layout::builder()
        .region(Region::Header, Rect::new(0, 0, 30, 1))
        .region(Region::MirrorInput, Rect::new(0, 2, 30, 1))
        .region(Region::Overlay, Rect::new(2, 4, 26, 6))
        .region(Region::FilterField, Rect::new(2, 4, 26, 1))
        .region(Region::Body, Rect::new(2, 5, 26, 5))
        .region(Region::List, Rect::new(2, 6, 26, 4))
        .build()
        .unwrap();
    let mut widget = Model::new(["Apple", "Banana", "Cherry"], layout);
    let _cmd = widget.open_modal();

    let lines: Vec<String> = widget.view().split('\n').map(plain).collect();
    assert_eq!(lines.len(), 10);
    assert!(lines[2].starts_with("Selected: "));
    assert!(lines[4].starts_with("  Filter: "));
    assert_eq!(lines[6], "  > Apple");

    widget.dispatch(&click(4, 7));
    assert_eq!(widget.selected_value(), "Banana");
}

#[test]
fn test_regions_sharing_a_row_keep_their_columns() {
    let layout = Layout::builder()
        .region(Region::Header, Rect::new(0, 0, 20, 1))
        .region(Region::MirrorInput, Rect::new(20, 0, 30, 1))
        .region(Region::Overlay, Rect::new(0, 1, 50, 6))
        .region(Region::FilterField, Rect::new(0, 1, 50, 1))
        .region(Region::Body, Rect::new(0, 2, 50, 5))
        .region(Region::List, Rect::new(0, 2, 50, 5))
        .build()
        .unwrap();
    let mut widget = Model::new(["Apple", "Banana", "Cherry"], layout);

    let view = plain(&widget.view());
    let top = view.split('\n').next().unwrap();
    let split = top.find("Selected").unwrap();
    let (head, tail) = top.split_at(split);
    assert_eq!(head.width(), 20);
    assert!(head.starts_with("Titles"));
    assert_eq!(tail, "Selected: nothing chosen yet");

    let _cmd = widget.open_modal();
    let view = plain(&widget.view());
    let lines: Vec<&str> = view.split('\n').collect();
    assert!(lines[0].starts_with("Titles"));
    assert!(lines[0].contains("Selected: "));
    assert_eq!(lines[2], "> Apple");
}

#[test]
fn test_narrow_mirror_shows_start_of_title() {
    let mut widget = Model::new(
        ["The Left Hand of Darkness", "東京物語"],
        Layout::for_size(20, 8).unwrap(),
    );
    widget.activate(0);
    let view = plain(&widget.view());
    let lines: Vec<&str> = view.split('\n').collect();
    assert_eq!(lines[1], "Selected: The Left H");

    widget.activate(1);
    let view = plain(&widget.view());
    let lines: Vec<&str> = view.split('\n').collect();
    assert_eq!(lines[1], "Selected: 東京物語");
    assert!(lines[1].width() <= 20);
}

#[test]
fn test_view_shows_dialog_only_while_open() {
    let mut widget = fruits();
    let closed = plain(&widget.view());
    let lines: Vec<&str> = closed.split('\n').collect();
    assert_eq!(lines.len(), 8);
    assert!(lines[0].contains("Titles"));
    assert!(lines[0].contains("enter open"));
    assert_eq!(lines[1], "Selected: nothing chosen yet");
    assert!(!closed.contains("Filter:"));
    assert!(!closed.contains("Apple"));

    let _cmd = widget.open_modal();
    let open = plain(&widget.view());
    let lines: Vec<&str> = open.split('\n').collect();
    assert!(lines[0].contains("↑ up"));
    assert_eq!(lines[2], "Filter: type to filter");
    assert_eq!(lines[3], "> Apple");
    assert_eq!(lines[4], "  Banana");
    assert_eq!(lines[6], "  3 of 3 titles");

    widget.activate(1);
    let chosen = plain(&widget.view());
    assert!(chosen.split('\n').nth(1) == Some("Selected: Banana"));
}

#[test]
fn test_config_is_applied() {
    let config = Config::default()
        .with_header("Books")
        .with_filter_prompt("Find: ", "title or part of one")
        .with_mirror_prompt("Book: ", "none")
        .with_item_noun("book", "books")
        .with_focus_delay(Duration::from_millis(50));
    let mut widget = Model::with_config(["Dune"], Layout::for_size(40, 6).unwrap(), config);
    assert_eq!(widget.focus.delay(), Duration::from_millis(50));

    let _cmd = widget.open_modal();
    let view = plain(&widget.view());
    assert!(view.contains("Books"));
    assert!(view.contains("Find: title or part of one"));
    assert!(view.contains("Book: none"));
    assert!(view.contains("1 of 1 book"));
}

#[test]
fn test_force_quit() {
    let mut widget = fruits();
    let quit: Msg = Box::new(KeyMsg {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
    });
    assert!(widget.dispatch(&quit).cmd.is_some());
}

#[test]
fn test_runtime_init() {
    let (widget, cmd) = <Model as BubbleTeaModel>::init();
    assert!(cmd.is_none());
    assert!(widget.list().is_empty());
    assert_eq!(widget.layout(), &Layout::default());
}
