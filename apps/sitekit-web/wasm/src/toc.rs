//! Table of contents for note pages
//!
//! Reads headings out of the document into a `PageOutline`, asks
//! `sitekit_core::toc::plan` for the result, then writes assigned ids back
//! onto the headings and replaces the side region's content.

use crate::dom::{self, DomResultExt};
use sitekit_core::toc::{self, HeadingLevel, HeadingRecord, PageOutline, SectionOutline};
use sitekit_core::{SiteError, TocConfig};
use web_sys::{Document, Element};

const HEADING_SELECTOR: &str = "h2, h3";

/// Build the table of contents if the page supports one
///
/// Returns `Ok(true)` when the side region was rewritten and `Ok(false)`
/// when the page has no place for, or nothing to put in, a TOC.
pub fn generate(document: &Document, config: &TocConfig) -> Result<bool, SiteError> {
    let has_layout_marker = document
        .query_selector(&config.layout_selector)
        .dom()?
        .is_some();
    let main = document.query_selector(&config.main_selector).dom()?;
    let aside = document.query_selector(&config.aside_selector).dom()?;

    let (sections, heading_elements) = match (&main, has_layout_marker) {
        (Some(main), true) => read_sections(main, config)?,
        _ => (Vec::new(), Vec::new()),
    };

    let page = PageOutline {
        has_layout_marker,
        has_main: main.is_some(),
        has_aside: aside.is_some(),
        sections,
    };

    let (Some(plan), Some(aside)) = (toc::plan(&page, config), aside) else {
        return Ok(false);
    };

    for (index, id) in &plan.assigned_ids {
        if let Some(heading) = heading_elements.get(*index) {
            heading.set_id(id);
        }
    }
    aside.set_inner_html(&plan.html);
    Ok(true)
}

/// Outline every section, keeping handles to the headings that can appear
/// in the TOC (all sections but the first) in the same flattened order
fn read_sections(
    main: &Element,
    config: &TocConfig,
) -> Result<(Vec<SectionOutline>, Vec<Element>), SiteError> {
    let list = main.query_selector_all(&config.section_selector).dom()?;
    let mut sections = Vec::new();
    let mut listed = Vec::new();

    for (index, section) in dom::elements::<Element>(&list).into_iter().enumerate() {
        let found = section.query_selector_all(HEADING_SELECTOR).dom()?;
        let headings = dom::elements::<Element>(&found);
        let mut outline = SectionOutline::default();
        for heading in headings {
            let Some(level) = HeadingLevel::from_tag(&heading.tag_name()) else {
                continue;
            };
            outline.headings.push(HeadingRecord::new(
                level,
                heading.text_content().unwrap_or_default(),
                Some(heading.id()),
            ));
            if index > 0 {
                listed.push(heading);
            }
        }
        sections.push(outline);
    }

    Ok((sections, listed))
}

#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const NOTE_HTML: &str = r#"
        <div class="note-layout">
          <main>
            <section><h2>Title</h2></section>
            <section><h2>First</h2><h3>Detail</h3></section>
            <section><h2 id="second">Second</h2><h3>More</h3></section>
          </main>
          <aside>placeholder</aside>
        </div>"#;

    fn mount(html: &str) -> (Document, Element) {
        let document = dom::document().unwrap();
        let host = document.create_element("div").unwrap();
        host.set_inner_html(html);
        document.body().unwrap().append_child(&host).unwrap();
        (document, host)
    }

    #[wasm_bindgen_test]
    fn test_generate_rewrites_aside() {
        let (document, host) = mount(NOTE_HTML);
        assert!(generate(&document, &TocConfig::default()).unwrap());

        let aside = document.query_selector("aside").unwrap().unwrap();
        let first = aside.inner_html();
        assert!(first.contains("<a href=\"#heading-1\">1. First</a>"));
        assert!(first.contains("<a href=\"#second\">2. Second</a>"));
        assert_eq!(
            document.get_element_by_id("heading-2").unwrap().tag_name(),
            "H3"
        );

        // Second run over the now-identified headings yields the same list
        assert!(generate(&document, &TocConfig::default()).unwrap());
        assert_eq!(aside.inner_html(), first);
        host.remove();
    }

    #[wasm_bindgen_test]
    fn test_missing_aside_is_noop() {
        let (document, host) = mount(
            r#"<div class="note-layout"><main><section></section><section><h2>A</h2></section></main></div>"#,
        );
        let config = TocConfig {
            aside_selector: "aside.missing".to_string(),
            ..TocConfig::default()
        };
        assert!(!generate(&document, &config).unwrap());
        let heading = document.query_selector("main h2").unwrap().unwrap();
        assert_eq!(heading.id(), "");
        host.remove();
    }
}
