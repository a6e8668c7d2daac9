use super::*;
use std::cell::RefCell;
use std::rc::Rc;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_tick_publishes_after_quiet_period() {
    let start = Instant::now();
    let mut pipeline = SearchTermsPipeline::new(ms(300));
    pipeline.input("accountant + excel", start);

    assert!(!pipeline.tick(start + ms(100)));
    assert!(pipeline.terms().is_empty());

    assert!(pipeline.tick(start + ms(300)));
    assert_eq!(
        pipeline.terms().as_slice(),
        &["accountant".to_string(), "excel".to_string()]
    );
    assert_eq!(pipeline.query(), "accountant + excel");
}

#[test]
fn test_repeated_query_is_not_republished() {
    let start = Instant::now();
    let mut pipeline = SearchTermsPipeline::new(ms(10));
    let publishes = Rc::new(RefCell::new(0));
    let sink = publishes.clone();
    let _sub = pipeline.subscribe(move |_| *sink.borrow_mut() += 1);

    pipeline.input("nurse", start);
    assert!(pipeline.tick(start + ms(10)));
    pipeline.input("nurse", start + ms(20));
    assert!(!pipeline.tick(start + ms(40)));

    // 订阅时一次 + 发布一次
    assert_eq!(*publishes.borrow(), 2);
}

#[test]
fn test_views_highlight_independently() {
    let start = Instant::now();
    let mut pipeline = SearchTermsPipeline::new(ms(0));

    let summary = Rc::new(RefCell::new(HighlightedText::new(
        Element::new("p").with_text("Hospital director, Excel expert"),
    )));
    let notes = Rc::new(RefCell::new(HighlightedText::new(
        Element::new("p").with_text("no relevant words"),
    )));

    let view = summary.clone();
    let _s1 = pipeline.subscribe(move |terms| view.borrow_mut().set_terms(terms));
    let view = notes.clone();
    let _s2 = pipeline.subscribe(move |terms| view.borrow_mut().set_terms(terms));

    pipeline.input(r#""hospital director" excel"#, start);
    assert!(pipeline.tick(start));

    assert_eq!(summary.borrow().container().mark_count(), 2);
    assert_eq!(notes.borrow().container().mark_count(), 0);
}

#[test]
fn test_content_change_reapplies_terms() {
    let mut view = HighlightedText::new(Element::new("p").with_text("excel"));
    view.set_terms(&TermList::from(vec!["excel".to_string()]));
    assert_eq!(view.container().mark_count(), 1);

    view.set_content(Element::new("p").with_text("Excel and excel"));
    assert_eq!(view.container().mark_count(), 2);
    assert_eq!(view.terms().len(), 1);
}

#[test]
fn test_teardown_stops_updates() {
    let start = Instant::now();
    let mut pipeline = SearchTermsPipeline::new(ms(0));
    let view = Rc::new(RefCell::new(HighlightedText::new(
        Element::new("p").with_text("nurse"),
    )));

    let target = view.clone();
    let sub = pipeline.subscribe(move |terms| target.borrow_mut().set_terms(terms));
    drop(sub);
    assert_eq!(pipeline.broadcast().subscriber_count(), 0);

    pipeline.input("nurse", start);
    pipeline.tick(start);
    assert_eq!(view.borrow().container().mark_count(), 0);
}
