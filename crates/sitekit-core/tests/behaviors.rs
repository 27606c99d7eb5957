//! End-to-end checks of the three behaviors through the public API

use pretty_assertions::assert_eq;
use sitekit_core::form::{Attachment, CharCounter, FieldError, Messages, SubmitOutcome};
use sitekit_core::toc::{self, HeadingLevel, HeadingRecord, PageOutline, SectionOutline};
use sitekit_core::{
    ClickDecision, DragEffect, DragSession, FieldId, FormValidator, FormValues, PointerInput,
    SiteConfig,
};

#[test]
fn drag_then_click_is_suppressed_but_link_click_is_not() {
    let config = SiteConfig::default();
    let mut session = DragSession::new(config.drag.click_threshold);

    assert_eq!(
        session.handle(PointerInput::Down {
            button: 0,
            client_x: 400.0,
            scroll_offset: 120.0,
        }),
        DragEffect::Started
    );
    assert_eq!(
        session.handle(PointerInput::Move { client_x: 380.0 }),
        DragEffect::ScrollTo(140.0)
    );
    assert_eq!(session.handle(PointerInput::Up), DragEffect::Ended);

    assert_eq!(session.click_decision(false), ClickDecision::StopImmediate);
    assert_eq!(session.click_decision(true), ClickDecision::Propagate);
}

#[test]
fn tap_without_movement_keeps_click() {
    let mut session = DragSession::default();
    session.handle(PointerInput::Down {
        button: 0,
        client_x: 10.0,
        scroll_offset: 0.0,
    });
    session.handle(PointerInput::Move { client_x: 13.0 });
    session.handle(PointerInput::Cancel);
    assert_eq!(session.click_decision(false), ClickDecision::Propagate);
}

#[test]
fn invalid_submit_reports_every_bad_field() {
    let config = SiteConfig::default();
    let validator = FormValidator::new(Messages::new(config.form.locale), CharCounter::new(200));
    let values = FormValues {
        name: "Hanako".to_string(),
        gender: None,
        email: "user@".to_string(),
        phone: "abc-123".to_string(),
        category: "other".to_string(),
        message: "   ".to_string(),
        attachment: Some(Attachment::new("doc.txt", "image/png-ish")),
        ..FormValues::default()
    };

    let outcome = validator.submit(&values);
    let SubmitOutcome::Rejected { report } = outcome else {
        panic!("submission should be rejected");
    };
    let errors: Vec<_> = report.errors().collect();
    assert_eq!(
        errors,
        vec![
            (FieldId::Gender, FieldError::GenderRequired),
            (FieldId::Email, FieldError::EmailFormat),
            (FieldId::Phone, FieldError::PhoneFormat),
            (FieldId::Message, FieldError::MessageRequired),
            (FieldId::Attachment, FieldError::AttachmentType),
        ]
    );
    assert_eq!(
        validator.messages().error_text(FieldError::EmailFormat),
        "メール形式が正しくありません"
    );
}

#[test]
fn toc_for_note_page() {
    let page = PageOutline {
        has_layout_marker: true,
        has_main: true,
        has_aside: true,
        sections: vec![
            SectionOutline {
                headings: vec![HeadingRecord::new(HeadingLevel::H2, "Note", None)],
            },
            SectionOutline {
                headings: vec![
                    HeadingRecord::new(HeadingLevel::H2, "Setup", Some("setup".to_string())),
                    HeadingRecord::new(HeadingLevel::H3, "Install", Some("1".to_string())),
                ],
            },
        ],
    };
    let plan = toc::plan(&page, &SiteConfig::default().toc).expect("toc expected");
    assert!(plan.assigned_ids.is_empty());
    assert_eq!(
        plan.html,
        "<nav><ol class=\"sidebar__ol\"><li><a href=\"#setup\">1. Setup</a></li>\
         <li class=\"toc-h3\"><a href=\"#1\">1. Install</a></li></ol></nav>"
    );
}
