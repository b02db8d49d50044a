#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::exception::*;
    use crate::exit::*;
    use crate::handler::*;
    use crate::location::Location;
    use std::cell::RefCell;
    use std::fmt;
    use std::rc::Rc;

    struct Looped {
        location: Location,
    }

    impl Reportable for Looped {
        fn class_name(&self) -> &str {
            "Looped"
        }

        fn message(&self) -> &str {
            "caused by itself"
        }

        fn code(&self) -> i64 {
            9
        }

        fn location(&self) -> &Location {
            &self.location
        }

        fn stack(&self) -> &str {
            ""
        }

        fn previous(&self) -> Option<&dyn Reportable> {
            Some(self)
        }
    }

    #[repr(C)]
    struct Wrapper {
        inner: ErrorRecord,
        location: Location,
    }

    impl Reportable for Wrapper {
        fn class_name(&self) -> &str {
            "Wrapper"
        }

        fn message(&self) -> &str {
            "request failed"
        }

        fn code(&self) -> i64 {
            5
        }

        fn location(&self) -> &Location {
            &self.location
        }

        fn stack(&self) -> &str {
            ""
        }

        fn previous(&self) -> Option<&dyn Reportable> {
            Some(&self.inner)
        }
    }

    static NOWHERE: Location = Location::unknown();

    macro_rules! zero_sized_error {
        ($name:ident, $previous:expr) => {
            struct $name;

            impl Reportable for $name {
                fn class_name(&self) -> &str {
                    stringify!($name)
                }

                fn message(&self) -> &str {
                    concat!(stringify!($name), " message")
                }

                fn code(&self) -> i64 {
                    0
                }

                fn location(&self) -> &Location {
                    &NOWHERE
                }

                fn stack(&self) -> &str {
                    ""
                }

                fn previous(&self) -> Option<&dyn Reportable> {
                    $previous
                }
            }
        };
    }

    zero_sized_error!(RootCause, None);
    zero_sized_error!(Surface, Some(&RootCause));

    #[derive(Debug)]
    struct ParseFailure;

    impl fmt::Display for ParseFailure {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "unexpected token")
        }
    }

    impl std::error::Error for ParseFailure {}

    fn handler() -> ExceptionHandler<String> {
        ExceptionHandler::with_console(String::new())
    }

    fn chain_of(depth: usize) -> ErrorRecord {
        let mut record = ErrorRecord::new("Exception", "link 0");
        for i in 1..depth {
            record = ErrorRecord::new("Exception", format!("link {}", i)).caused_by(record);
        }
        record
    }

    #[test]
    fn default_output_has_no_placeholders_left() {
        let handler = handler();
        let message = handler.render(&ErrorRecord::new("Exception", "testing")).unwrap();
        assert!(message.contains("Exception"));
        assert!(message.contains("testing"));
        assert!(!message.contains(":className"));
        assert!(!message.contains(":message"));
        assert!(!message.contains(":previous"));
    }

    #[test]
    fn file_and_line_are_rendered() {
        let mut handler = handler();
        handler.set_template(":file::line");
        let error = ErrorRecord::new("Exception", "testing").at(Location::new("src/main.rs", 42));
        assert_eq!(handler.render(&error).unwrap(), "src/main.rs:42");
    }

    #[test]
    fn causes_are_appended_without_previous_placeholder() {
        let mut handler = handler();
        handler.set_template(":className(:code)");
        let error = ErrorRecord::new("Outer", "")
            .with_code(2)
            .caused_by(ErrorRecord::new("Inner", "").with_code(1));
        assert_eq!(handler.render(&error).unwrap(), "Outer(2)\nInner(1)");
    }

    #[test]
    fn previous_nests_cause_blocks() {
        let mut handler = handler();
        handler.set_template("[:message:previous]");
        let error = ErrorRecord::new("Exception", "a")
            .caused_by(ErrorRecord::new("Exception", "b").caused_by(ErrorRecord::new("Exception", "c")));
        assert_eq!(handler.render(&error).unwrap(), "[a[b[c]]]");
    }

    #[test]
    fn cyclic_chain_is_rejected() {
        let handler = handler();
        let error = Looped { location: Location::unknown() };
        match handler.render(&error) {
            Err(Error::CyclicChain { class_name, depth }) => {
                assert_eq!(class_name, "Looped");
                assert_eq!(depth, 1);
            }
            other => panic!("expected a cyclic chain error, got {:?}", other),
        }
    }

    #[test]
    fn cause_sharing_wrapper_address_is_rendered() {
        let mut handler = handler();
        handler.set_template(":className(:code) :message");
        let error = Wrapper {
            inner: ErrorRecord::new("Inner", "root cause").with_code(1),
            location: Location::unknown(),
        };
        assert_eq!(handler.render(&error).unwrap(), "Wrapper(5) request failed\nInner(1) root cause");
    }

    #[test]
    fn zero_sized_chain_is_rendered() {
        let mut handler = handler();
        handler.set_template(":message");
        assert_eq!(handler.render(&Surface).unwrap(), "Surface message\nRootCause message");
    }

    #[test]
    fn invoke_reports_cause_sharing_wrapper_address() {
        let mut handler = handler();
        handler.set_template(":className: :message");
        let error = Wrapper {
            inner: ErrorRecord::new("Inner", "root cause"),
            location: Location::unknown(),
        };
        handler.invoke(&error);
        assert_eq!(handler.console(), "Wrapper: request failed\nInner: root cause\n");
    }

    #[test]
    fn zero_chain_depth_still_renders_outer_error() {
        let config = HandlerConfig::default().with_template(":message").with_max_chain_depth(0);
        assert_eq!(config.max_chain_depth, 1);
        let handler = ExceptionHandler::with_config(String::new(), config);
        assert_eq!(handler.render(&ErrorRecord::new("Exception", "alone")).unwrap(), "alone");
        assert!(matches!(handler.render(&chain_of(2)), Err(Error::ChainTooDeep { limit: 1 })));

        let config = HandlerConfig {
            template: ":message".to_owned(),
            max_chain_depth: 0,
        };
        let handler = ExceptionHandler::with_config(String::new(), config);
        assert_eq!(handler.render(&ErrorRecord::new("Exception", "alone")).unwrap(), "alone");
    }

    #[test]
    fn chain_depth_is_limited() {
        let config = HandlerConfig::default().with_template(":message").with_max_chain_depth(3);
        let handler = ExceptionHandler::with_config(String::new(), config);
        assert!(handler.render(&chain_of(3)).is_ok());
        assert!(matches!(handler.render(&chain_of(4)), Err(Error::ChainTooDeep { limit: 3 })));
    }

    #[test]
    fn invoke_writes_fallback_for_cyclic_chain() {
        let mut handler = handler();
        let code = handler.invoke(&Looped { location: Location::unknown() });
        assert_eq!(code, EXIT_GENERAL_ERROR);
        assert_eq!(handler.console(), "Looped: caused by itself\n");
    }

    #[test]
    fn invoke_writes_report_and_returns_failure() {
        let mut handler = handler();
        handler.set_template(":className: :message");
        let code = handler.invoke(&ErrorRecord::new("RuntimeException", "Exception raised"));
        assert_eq!(code, EXIT_GENERAL_ERROR);
        assert_eq!(handler.into_console(), "RuntimeException: Exception raised\n");
    }

    #[test]
    fn listeners_run_in_attachment_order() {
        let calls = Rc::new(RefCell::new(vec![]));
        let mut handler = handler();
        for name in ["first", "second", "third"] {
            let calls = calls.clone();
            handler.attach_listener(Rc::new(move |error: &dyn Reportable| {
                calls.borrow_mut().push(format!("{} {}", name, error.message()));
            }));
        }

        handler.invoke(&ErrorRecord::new("Exception", "boom"));
        assert_eq!(*calls.borrow(), ["first boom", "second boom", "third boom"]);
    }

    #[test]
    fn detached_listener_is_not_called() {
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        let listener: Listener = Rc::new(move |_: &dyn Reportable| *counter.borrow_mut() += 1);

        let mut handler = handler();
        handler.attach_listener(listener.clone());
        assert!(handler.detach_listener(&listener));
        assert!(!handler.detach_listener(&listener));
        assert!(handler.listeners().is_empty());

        handler.invoke(&ErrorRecord::new("Exception", "boom"));
        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn listener_set_rejects_duplicates() {
        let first: Listener = Rc::new(|_: &dyn Reportable| {});
        let second: Listener = Rc::new(|_: &dyn Reportable| {});
        let mut set = ListenerSet::new();
        assert!(set.insert(first.clone()));
        assert!(!set.insert(first.clone()));
        assert!(set.insert(second.clone()));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&first));
        assert!(set.remove(&first));
        assert!(!set.contains(&first));
        assert!(set.contains(&second));
    }

    #[test]
    fn handle_passes_success_through() {
        let mut handler = handler();
        assert_eq!(handler.handle(Ok::<_, ParseFailure>(())), EXIT_SUCCESS);
        assert!(handler.console().is_empty());
    }

    #[test]
    fn handle_reports_std_errors() {
        let mut handler = handler();
        handler.set_template(":className: :message");
        assert_eq!(handler.handle(Err::<(), _>(ParseFailure)), EXIT_GENERAL_ERROR);
        assert_eq!(handler.console(), "ParseFailure: unexpected token\n");
    }
}
