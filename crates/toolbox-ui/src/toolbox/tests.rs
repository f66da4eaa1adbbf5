//! End-to-end tests for the assembled toolbox.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::*;
use toolbox_common::{ActionSpec, IconSize, MemoryPreferences, PreferenceStoreError, ToolGroup};

use crate::button::ButtonContent;

/// `[("Classes", [CreateClass, CreateAssoc]), (None, [Pointer])]`
fn uml_definition() -> ToolboxDefinition {
    ToolboxDefinition::new(vec![
        ToolGroup::titled(
            "Classes",
            vec![
                ActionSpec::new("CreateClass")
                    .with_label("Class")
                    .with_icon("icon-class")
                    .with_shortcut("c"),
                ActionSpec::new("CreateAssoc")
                    .with_label("Association")
                    .with_shortcut("a"),
            ],
        ),
        ToolGroup::untitled(vec![ActionSpec::new("Pointer").with_icon("icon-pointer")]),
    ])
}

fn recorder(toolbox: &mut Toolbox) -> Rc<RefCell<Vec<GroupVisibilityChanged>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    toolbox.on_group_visibility_changed(move |e| sink.borrow_mut().push(e.clone()));
    seen
}

#[test]
fn uml_scenario_compiles_to_expected_tree() {
    let prefs = MemoryPreferences::new();
    let toolbox = Toolbox::build(&uml_definition(), &prefs).unwrap();

    let names: Vec<&str> = toolbox.buttons().iter().map(|b| b.action().as_str()).collect();
    assert_eq!(names, vec!["CreateClass", "CreateAssoc", "Pointer"]);

    let shortcuts: HashMap<&str, &str> = toolbox
        .shortcuts()
        .iter()
        .map(|(s, a)| (s, a.as_str()))
        .collect();
    assert_eq!(
        shortcuts,
        HashMap::from([("c", "CreateClass"), ("a", "CreateAssoc")])
    );

    assert_eq!(toolbox.sections().len(), 2);
    match &toolbox.sections()[0] {
        Section::Group(panel) => {
            assert_eq!(panel.title(), "Classes");
            assert_eq!(panel.content().children(), &[ButtonId(0), ButtonId(1)]);
        }
        other => panic!("expected group, got {other:?}"),
    }
    match &toolbox.sections()[1] {
        Section::Flow(wrap) => assert_eq!(wrap.children(), &[ButtonId(2)]),
        other => panic!("expected flow, got {other:?}"),
    }
}

#[test]
fn uml_scenario_button_rendering() {
    let prefs = MemoryPreferences::new();
    let toolbox = Toolbox::build(&uml_definition(), &prefs).unwrap();

    let class = toolbox.button(ButtonId(0)).unwrap();
    assert_eq!(class.content(), ButtonContent::Icon("icon-class".into()));
    assert_eq!(class.tooltip().as_deref(), Some("Class (c)"));

    let assoc = toolbox.button(ButtonId(1)).unwrap();
    assert_eq!(assoc.content(), ButtonContent::Label("Association".into()));
    assert_eq!(assoc.tooltip().as_deref(), Some("Association (a)"));

    let pointer = toolbox.button(ButtonId(2)).unwrap();
    assert_eq!(pointer.tooltip(), None);
}

#[test]
fn duplicate_shortcut_aborts_build() {
    let mut def = uml_definition();
    def.groups[1].items[0].shortcut = Some("c".into());
    let prefs = MemoryPreferences::new();
    assert!(matches!(
        Toolbox::build(&def, &prefs),
        Err(DefinitionError::DuplicateShortcut { .. })
    ));
}

#[test]
fn stored_preference_expands_group() {
    let def = ToolboxDefinition::new(vec![ToolGroup::titled(
        "Structure",
        vec![ActionSpec::new("CreatePackage")],
    )]);

    let prefs = MemoryPreferences::new().with("ui.toolbox.structure", true);
    let toolbox = Toolbox::build(&def, &prefs).unwrap();
    assert!(toolbox.group("Structure").unwrap().is_expanded());

    let prefs = MemoryPreferences::new();
    let toolbox = Toolbox::build(&def, &prefs).unwrap();
    assert!(!toolbox.group("Structure").unwrap().is_expanded());
}

#[test]
fn toggle_persists_post_toggle_state() {
    let def = ToolboxDefinition::new(vec![ToolGroup::titled(
        "Structure",
        vec![ActionSpec::new("CreatePackage")],
    )]);
    let mut prefs = MemoryPreferences::new().with("ui.toolbox.structure", true);
    let mut toolbox = Toolbox::build(&def, &prefs).unwrap();

    assert_eq!(toolbox.activate_group("Structure", &mut prefs), Some(false));
    assert!(!toolbox.group("Structure").unwrap().is_expanded());
    assert_eq!(prefs.get("ui.toolbox.structure", true), Ok(false));

    assert_eq!(toolbox.activate_group("Structure", &mut prefs), Some(true));
    assert!(toolbox.group("Structure").unwrap().is_expanded());
    assert_eq!(prefs.get("ui.toolbox.structure", false), Ok(true));
}

#[test]
fn drag_offers_action_name_under_every_type() {
    let prefs = MemoryPreferences::new();
    let toolbox = Toolbox::build(&uml_definition(), &prefs).unwrap();
    let (id, _) = toolbox.button_for_action("CreateClass").unwrap();

    let payloads: Vec<DragPayload> = DragTarget::ALL
        .iter()
        .map(|t| toolbox.drag_data_get(id, *t).unwrap())
        .collect();
    assert_eq!(payloads.len(), 3);
    for payload in &payloads {
        assert_eq!(payload.data(), b"CreateClass");
    }
    assert_eq!(
        payloads.iter().map(|p| p.target()).collect::<Vec<_>>(),
        DragTarget::ALL.to_vec()
    );
}

#[test]
fn listeners_see_one_event_per_activation() {
    let mut prefs = MemoryPreferences::new();
    let mut toolbox = Toolbox::build(&uml_definition(), &prefs).unwrap();
    let first = recorder(&mut toolbox);
    let second = recorder(&mut toolbox);

    toolbox.activate_group("Classes", &mut prefs);
    toolbox.activate_group("Classes", &mut prefs);

    let expected = vec![
        GroupVisibilityChanged {
            title: "Classes".into(),
            expanded: true,
        },
        GroupVisibilityChanged {
            title: "Classes".into(),
            expanded: false,
        },
    ];
    assert_eq!(*first.borrow(), expected);
    assert_eq!(*second.borrow(), expected);
}

#[test]
fn removed_listener_is_silent() {
    let mut prefs = MemoryPreferences::new();
    let mut toolbox = Toolbox::build(&uml_definition(), &prefs).unwrap();

    let seen = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&seen);
    let id = toolbox.on_group_visibility_changed(move |_| *sink.borrow_mut() += 1);

    toolbox.activate_group("Classes", &mut prefs);
    assert!(toolbox.remove_listener(id));
    toolbox.activate_group("Classes", &mut prefs);
    assert_eq!(*seen.borrow(), 1);
}

#[test]
fn unknown_group_is_ignored() {
    let mut prefs = MemoryPreferences::new();
    let mut toolbox = Toolbox::build(&uml_definition(), &prefs).unwrap();
    let seen = recorder(&mut toolbox);

    assert_eq!(toolbox.activate_group("Nope", &mut prefs), None);
    assert!(seen.borrow().is_empty());
    assert!(prefs.is_empty());
}

#[test]
fn read_failure_falls_back_to_collapsed() {
    struct Unreadable;

    impl PreferenceStore for Unreadable {
        fn get(&self, key: &str, _default: bool) -> Result<bool, PreferenceStoreError> {
            Err(PreferenceStoreError::WrongType {
                key: key.into(),
                found: "integer".into(),
            })
        }

        fn set(&mut self, _key: &str, _value: bool) -> Result<(), PreferenceStoreError> {
            Ok(())
        }
    }

    let toolbox = Toolbox::build(&uml_definition(), &Unreadable).unwrap();
    assert!(!toolbox.group("Classes").unwrap().is_expanded());
}

#[test]
fn button_toggle_state_is_retrievable() {
    let prefs = MemoryPreferences::new();
    let mut toolbox = Toolbox::build(&uml_definition(), &prefs).unwrap();

    assert_eq!(toolbox.toggle_button(ButtonId(2)), Some(true));
    assert!(toolbox.button(ButtonId(2)).unwrap().is_active());
    assert_eq!(toolbox.set_button_active(ButtonId(2), false), Some(true));
    assert!(!toolbox.button(ButtonId(2)).unwrap().is_active());
    assert_eq!(toolbox.toggle_button(ButtonId(9)), None);
}

#[test]
fn lookups() {
    let prefs = MemoryPreferences::new();
    let toolbox = Toolbox::build(&uml_definition(), &prefs).unwrap();

    assert_eq!(
        toolbox.action_for_shortcut("a").map(|a| a.as_str()),
        Some("CreateAssoc")
    );
    assert_eq!(toolbox.action_for_shortcut("q"), None);
    assert_eq!(toolbox.button_for_action("Pointer").map(|(id, _)| id), Some(ButtonId(2)));
    assert!(toolbox.button_for_action("Missing").is_none());
    assert_eq!(toolbox.groups().count(), 1);
}

#[test]
fn icon_size_reaches_buttons() {
    let prefs = MemoryPreferences::new();
    let toolbox =
        Toolbox::build_with_icon_size(&uml_definition(), &prefs, IconSize::SmallToolbar).unwrap();
    assert!(toolbox
        .buttons()
        .iter()
        .all(|b| b.icon_size() == IconSize::SmallToolbar));
}

#[test]
fn view_serializes_tree() {
    let prefs = MemoryPreferences::new().with("ui.toolbox.classes", true);
    let toolbox = Toolbox::build(&uml_definition(), &prefs).unwrap();
    let json = serde_json::to_value(toolbox.view()).unwrap();

    assert_eq!(json["sections"][0]["kind"], "group");
    assert_eq!(json["sections"][0]["title"], "Classes");
    assert_eq!(json["sections"][0]["state"], "Expanded");
    assert_eq!(json["sections"][1]["kind"], "flow");
    assert_eq!(json["buttons"][2]["action"], "Pointer");
    assert_eq!(json["shortcuts"]["c"], "CreateClass");
}
