//! Section guards keep the stack balanced however their scope is left.

use std::cell::RefCell;
use std::rc::Rc;

use utest::{check_eq, EventBuffer, Registry, ReportEvent, SectionStack, Verbosity};

fn run_single<F>(verbosity: Verbosity, body: F) -> (Registry, EventBuffer)
where
    F: FnMut(&mut utest::Checker<'_>) + 'static,
{
    let mut registry = Registry::new();
    registry.config_mut().verbosity = verbosity;
    registry.register("sections", "fixture", body);
    let mut sink = EventBuffer::new();
    registry.run_all(&mut sink);
    (registry, sink)
}

#[cfg(test)]
mod balance_tests {
    use super::*;

    #[test]
    fn test_depth_is_restored_after_nested_scopes() {
        let depths = Rc::new(RefCell::new(Vec::new()));
        let seen = Rc::clone(&depths);
        run_single(Verbosity::Quiet, move |t| {
            seen.borrow_mut().push(t.depth());
            {
                let mut outer = t.section("outer");
                seen.borrow_mut().push(outer.depth());
                {
                    let mut inner = outer.section("inner");
                    check_eq!(inner, 1, 1);
                    check_eq!(inner, 2, 2);
                    seen.borrow_mut().push(inner.depth());
                }
                seen.borrow_mut().push(outer.depth());
            }
            seen.borrow_mut().push(t.depth());
        });
        assert_eq!(*depths.borrow(), vec![0, 1, 2, 1, 0]);
    }

    #[test]
    fn test_early_exit_still_pops() {
        let depth_after = Rc::new(RefCell::new(None));
        let seen = Rc::clone(&depth_after);
        run_single(Verbosity::Quiet, move |t| {
            for i in 0..3 {
                let mut s = t.section("loop");
                check_eq!(s, i, i);
                if i == 1 {
                    break;
                }
            }
            let result = (|| -> Result<(), ()> {
                let _s = t.section("fallible");
                let failed: Result<(), ()> = Err(());
                failed?;
                Ok(())
            })();
            assert!(result.is_err());
            *seen.borrow_mut() = Some(t.depth());
        });
        assert_eq!(*depth_after.borrow(), Some(0));
    }

    #[test]
    fn test_in_section_returns_body_value() {
        let (registry, _) = run_single(Verbosity::Quiet, |t| {
            let path = t.in_section("named", |t| t.path());
            assert_eq!(path, "main.named");
            assert_eq!(t.depth(), 0);
        });
        assert_eq!(registry.fixtures()[0].state().sections().depth(), 0);
    }

    #[test]
    fn test_refused_push_does_not_unbalance() {
        let (registry, _) = run_single(Verbosity::Quiet, |t| {
            fn descend(t: &mut utest::Checker<'_>, remaining: usize) {
                if remaining == 0 {
                    return;
                }
                let mut s = t.section("level");
                descend(&mut s, remaining - 1);
            }
            descend(t, SectionStack::CAPACITY + 4);
            assert_eq!(t.depth(), 0);
        });
        assert_eq!(registry.fixtures()[0].state().sections().depth(), 0);
    }
}

#[cfg(test)]
mod header_tests {
    use super::*;

    fn headers(sink: &EventBuffer) -> Vec<String> {
        sink.events()
            .iter()
            .filter_map(|e| match e {
                ReportEvent::SectionHeader { path } => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_header_printed_once_per_section_change() {
        let (_, sink) = run_single(Verbosity::Passed, |t| {
            check_eq!(t, 0, 0);
            {
                let mut s = t.section("first");
                check_eq!(s, 1, 1);
                check_eq!(s, 2, 2);
            }
            {
                let mut s = t.section("second");
                let mut inner = s.section("deep");
                check_eq!(inner, 3, 3);
            }
        });
        assert_eq!(
            headers(&sink),
            vec!["main", "main.first", "main.second.deep"]
        );
    }

    #[test]
    fn test_returning_to_parent_reprints_its_path() {
        let (_, sink) = run_single(Verbosity::Passed, |t| {
            {
                let mut s = t.section("child");
                check_eq!(s, 1, 1);
            }
            check_eq!(t, 2, 2);
        });
        assert_eq!(headers(&sink), vec!["main.child", "main"]);
    }
}
