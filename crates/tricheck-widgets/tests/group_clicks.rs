//! Click-driven group behavior through the text renderer.

use tricheck_core::{ChildConfig, DerivedParentState, GroupConfig};
use tricheck_widgets::text::UNICODE;
use tricheck_widgets::{Checkbox, CheckboxState, GroupView, TextCheckbox};

fn lines(view: &GroupView, renderer: &mut TextCheckbox) -> Vec<String> {
    let nodes = view.render(renderer);
    renderer.layout(&nodes)
}

#[test]
fn single_checkbox_click_cycle() {
    let state = CheckboxState::default();
    let checkbox = Checkbox::new("checkbox");
    let mut renderer = TextCheckbox::new();

    let node = checkbox.render(&mut renderer, &state);
    assert_eq!(node.line(), "[ ] checkbox");

    assert!(node.click());
    let node = checkbox.render(&mut renderer, &state);
    assert_eq!(node.line(), "[x] checkbox");

    assert!(node.click());
    assert!(!state.is_checked());
}

#[test]
fn reference_scenario_by_clicks() {
    let view = GroupView::new(GroupConfig::reference()).unwrap();
    let request = view.watch();
    let mut renderer = TextCheckbox::new();

    assert_eq!(
        lines(&view, &mut renderer),
        vec!["[-] Parent", "  [x] Child 1", "  [ ] Child 2"]
    );

    // Clicking an indeterminate parent checks everything.
    let nodes = view.render(&mut renderer);
    nodes.parent.click();
    assert!(request.take());
    assert_eq!(view.state().as_slice(), &[true, true]);
    assert_eq!(
        lines(&view, &mut renderer),
        vec!["[x] Parent", "  [x] Child 1", "  [x] Child 2"]
    );

    let nodes = view.render(&mut renderer);
    nodes.children[0].click();
    assert!(request.take());
    assert_eq!(view.parent_state(), DerivedParentState::INDETERMINATE);
    assert_eq!(
        lines(&view, &mut renderer),
        vec!["[-] Parent", "  [ ] Child 1", "  [x] Child 2"]
    );

    let nodes = view.render(&mut renderer);
    nodes.children[1].click();
    assert!(request.take());
    assert_eq!(view.state().as_slice(), &[false, false]);
    assert_eq!(
        lines(&view, &mut renderer),
        vec!["[ ] Parent", "  [ ] Child 1", "  [ ] Child 2"]
    );
}

#[test]
fn unchecked_parent_click_checks_all_and_back() {
    let config = GroupConfig::new("All")
        .child("a", false)
        .child("b", false)
        .child("c", false);
    let view = GroupView::new(config).unwrap();
    let mut renderer = TextCheckbox::new().glyphs(UNICODE).indent(4);

    view.render(&mut renderer).parent.click();
    assert_eq!(view.parent_state(), DerivedParentState::CHECKED);

    view.render(&mut renderer).parent.click();
    assert_eq!(view.parent_state(), DerivedParentState::UNCHECKED);
    assert_eq!(lines(&view, &mut renderer)[3], "    ☐ c");
}

#[test]
fn disabled_children_render_and_ignore_clicks() {
    let config = GroupConfig::new("Parent")
        .with_child(ChildConfig::new("disabled", true).disabled(true))
        .with_child(ChildConfig::new("disabled", false).disabled(true));
    let view = GroupView::new(config).unwrap();
    let mut renderer = TextCheckbox::new();

    let nodes = view.render(&mut renderer);
    assert_eq!(nodes.children[0].line(), "[x] disabled (disabled)");
    assert_eq!(nodes.children[1].line(), "[ ] disabled (disabled)");
    assert!(!nodes.children[0].click());
    assert_eq!(view.state().as_slice(), &[true, false]);
}

#[test]
fn stale_nodes_report_values_from_their_render() {
    let view = GroupView::new(GroupConfig::reference()).unwrap();
    let mut renderer = TextCheckbox::new();

    let stale = view.render(&mut renderer);
    stale.children[1].click();
    assert_eq!(view.state().as_slice(), &[true, true]);

    // The stale node still thinks child 1 is unchecked and reports `true` again.
    stale.children[1].click();
    assert_eq!(view.state().as_slice(), &[true, true]);
    assert_eq!(view.group().version(), 1);
}
