use std::cell::RefCell;
use std::rc::Rc;

use admin_shell::prelude::*;

fn is_active(host: &MemoryHost, id: &str) -> bool {
    host.element(id).unwrap().contains("active")
}

fn assert_synced(host: &MemoryHost, expected: bool) {
    assert_eq!(is_active(host, "sidebar"), expected, "sidebar");
    assert_eq!(is_active(host, "body"), expected, "body");
}

fn recording_observer() -> (Observer, Rc<RefCell<Vec<SidebarEvent>>>) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    let observer: Observer =
        Rc::new(move |event: &SidebarEvent| sink.borrow_mut().push(event.clone()));
    (observer, events)
}

#[test]
fn click_toggles_both_from_either_state() {
    for initial in [false, true] {
        let host = MemoryHost::admin_page(1024);
        if initial {
            host.element("sidebar").unwrap().add("active");
            host.element("body").unwrap().add("active");
        }
        let _attachment = attach(&host, &SidebarConfig::default(), None).unwrap();

        host.click("sidebarCollapse");
        assert_synced(&host, !initial);
    }
}

#[test]
fn double_click_restores_initial_state() {
    let host = MemoryHost::admin_page(1024);
    host.element("sidebar").unwrap().add("active");
    host.element("body").unwrap().add("active");
    let _attachment = attach(&host, &SidebarConfig::default(), None).unwrap();

    host.click("sidebarCollapse");
    host.click("sidebarCollapse");
    assert_synced(&host, true);
}

#[test]
fn narrow_resize_is_idempotent() {
    let host = MemoryHost::admin_page(1024);
    let _attachment = attach(&host, &SidebarConfig::default(), None).unwrap();

    for _ in 0..3 {
        host.resize(500);
        assert_synced(&host, true);
    }

    // Already collapsed by hand: stays collapsed
    host.click("sidebarCollapse");
    host.click("sidebarCollapse");
    host.resize(500);
    assert_synced(&host, true);
}

#[test]
fn wide_resize_is_idempotent() {
    let host = MemoryHost::admin_page(500);
    host.element("sidebar").unwrap().add("active");
    host.element("body").unwrap().add("active");
    let _attachment = attach(&host, &SidebarConfig::default(), None).unwrap();

    for _ in 0..3 {
        host.resize(1024);
        assert_synced(&host, false);
    }
}

#[test]
fn breakpoint_width_counts_as_narrow() {
    let host = MemoryHost::admin_page(1024);
    let _attachment = attach(&host, &SidebarConfig::default(), None).unwrap();

    host.resize(768);
    assert_synced(&host, true);
    host.resize(769);
    assert_synced(&host, false);
}

#[test]
fn missing_toggle_button_is_harmless() {
    let host = MemoryHost::admin_page(1024);
    host.remove_element("sidebarCollapse");

    let attachment = attach(&host, &SidebarConfig::default(), None).unwrap();
    assert_eq!(attachment.listener_count(), 2);

    host.click("sidebarCollapse");
    assert_synced(&host, false);
}

#[test]
fn missing_sidebar_and_body_are_skipped() {
    let host = MemoryHost::new(1024);
    let button = host.insert_element("sidebarCollapse");

    let attachment = attach(&host, &SidebarConfig::default(), None).unwrap();
    assert_eq!(attachment.listener_count(), 3);

    host.click("sidebarCollapse");
    host.resize(400);
    assert!(button.classes().is_empty());
    assert_eq!(attachment.controller().is_active(), None);
}

#[test]
fn detach_removes_every_listener() {
    let host = MemoryHost::admin_page(1024);
    let attachment = attach(&host, &SidebarConfig::default(), None).unwrap();
    assert_eq!(host.listener_count(), 3);

    attachment.detach();
    assert_eq!(host.listener_count(), 0);

    host.click("sidebarCollapse");
    host.resize(500);
    assert_synced(&host, false);
}

#[test]
fn dropping_the_attachment_detaches() {
    let host = MemoryHost::admin_page(1024);
    {
        let _attachment = attach(&host, &SidebarConfig::default(), None).unwrap();
        assert_eq!(host.listener_count(), 3);
    }
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn observer_gets_one_event_per_handler_run() {
    let host = MemoryHost::admin_page(1024);
    let (observer, events) = recording_observer();
    let _attachment = attach(&host, &SidebarConfig::default(), Some(observer)).unwrap();

    host.click("sidebarCollapse");
    host.resize(600);
    host.resize(1100);

    assert_eq!(
        *events.borrow(),
        vec![
            SidebarEvent::Toggled { active: true },
            SidebarEvent::LayoutApplied { width: 600, layout: Layout::Narrow },
            SidebarEvent::LayoutApplied { width: 1100, layout: Layout::Wide },
        ]
    );
}

#[test]
fn sync_on_attach_applies_current_width() {
    let host = MemoryHost::admin_page(640);
    let (observer, events) = recording_observer();
    let config = SidebarConfig { sync_on_attach: true, ..Default::default() };
    let _attachment = attach(&host, &config, Some(observer)).unwrap();

    assert_synced(&host, true);
    assert_eq!(
        *events.borrow(),
        vec![SidebarEvent::LayoutApplied { width: 640, layout: Layout::Narrow }]
    );
}

#[test]
fn attach_without_sync_leaves_classes_alone() {
    let host = MemoryHost::admin_page(640);
    let _attachment = attach(&host, &SidebarConfig::default(), None).unwrap();
    assert_synced(&host, false);
}

#[test]
fn config_from_json_drives_ids() {
    let host = MemoryHost::new(1024);
    host.insert_element("nav");
    host.insert_element("main");
    host.insert_element("menu-button");
    let config = SidebarConfig::from_json(
        r#"{ "sidebarId": "nav", "bodyId": "main", "toggleId": "menu-button" }"#,
    )
    .unwrap();
    let _attachment = attach(&host, &config, None).unwrap();

    host.click("menu-button");
    assert!(is_active(&host, "nav"));
    assert!(is_active(&host, "main"));
}
