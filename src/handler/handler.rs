use super::*;
use crate::error::{Error, Result};
use crate::exception::{ErrorRecord, Reportable};
use crate::exit::*;
use crate::template::{Placeholder, Template};
use std::borrow::Cow;
use std::io;

/// Turns uncaught errors into a console report and an exit code.
pub struct ExceptionHandler<C: Console = io::Stderr> {
    console: C,
    template: Template,
    listeners: ListenerSet,
    max_chain_depth: usize,
}

impl ExceptionHandler<io::Stderr> {
    pub fn new() -> Self {
        Self::with_console(io::stderr())
    }
}

impl Default for ExceptionHandler<io::Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Console> ExceptionHandler<C> {
    pub fn with_console(console: C) -> Self {
        Self::with_config(console, HandlerConfig::default())
    }

    pub fn with_config(console: C, config: HandlerConfig) -> Self {
        Self {
            console,
            template: Template::parse(config.template),
            listeners: ListenerSet::new(),
            max_chain_depth: config.max_chain_depth.max(1),
        }
    }

    pub fn set_template(&mut self, text: impl Into<String>) {
        self.template = Template::parse(text);
    }

    pub fn template(&self) -> &str {
        self.template.as_str()
    }

    pub fn attach_listener(&mut self, listener: Listener) {
        if !self.listeners.insert(listener) {
            log::debug!("listener is already attached");
        }
    }

    pub fn detach_listener(&mut self, listener: &Listener) -> bool {
        self.listeners.remove(listener)
    }

    pub fn listeners(&self) -> &ListenerSet {
        &self.listeners
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Renders `error` and every error it was caused by, outermost first.
    ///
    /// `:previous` receives the rendering of the cause, or nothing when there is none.
    /// Without a `:previous` placeholder the causes are appended on their own lines.
    pub fn render(&self, error: &dyn Reportable) -> Result<String> {
        let chain = self.chain(error)?;
        let mut rendered: Option<String> = None;
        for error in chain.into_iter().rev() {
            let previous = rendered.take();
            let block = self.render_block(error, previous.as_deref());
            rendered = Some(match previous {
                Some(previous) if !self.template.contains(Placeholder::Previous) => {
                    format!("{}\n{}", block, previous)
                }
                _ => block,
            });
        }
        Ok(rendered.unwrap_or_default())
    }

    /// Reports `error` and returns the exit code for the process.
    ///
    /// Listeners run even when the report could not be written.
    pub fn invoke(&mut self, error: &dyn Reportable) -> i32 {
        let message = match self.render(error) {
            Ok(message) => message,
            Err(e) => {
                log::error!("could not render {}: {}", error.class_name(), e);
                format!("{}: {}", error.class_name(), error.message())
            }
        };

        if let Err(e) = self.console.write_line(&message).map_err(Error::from) {
            log::warn!("{}", e);
        }

        log::debug!("notifying {} listener(s) of {}", self.listeners.len(), error.class_name());
        self.listeners.notify(error);
        EXIT_GENERAL_ERROR
    }

    /// Passes `Ok` through as a success code, reports `Err`.
    pub fn handle<T, E: std::error::Error>(&mut self, result: std::result::Result<T, E>) -> i32 {
        match result {
            Ok(_) => EXIT_SUCCESS,
            Err(error) => self.invoke(&ErrorRecord::from_error(&error)),
        }
    }

    fn chain<'e>(&self, error: &'e dyn Reportable) -> Result<Vec<&'e dyn Reportable>> {
        let mut chain: Vec<&'e dyn Reportable> = vec![];
        let mut next = Some(error);
        while let Some(error) = next {
            // a cause at offset 0 of its wrapper shares the wrapper's address
            if chain.iter().any(|seen| std::ptr::eq(*seen, error)) {
                return Err(Error::CyclicChain {
                    class_name: error.class_name().to_owned(),
                    depth: chain.len(),
                });
            }
            if chain.len() == self.max_chain_depth {
                return Err(Error::ChainTooDeep { limit: self.max_chain_depth });
            }
            chain.push(error);
            next = error.previous();
        }
        Ok(chain)
    }

    fn render_block(&self, error: &dyn Reportable, previous: Option<&str>) -> String {
        self.template.render(|placeholder| match placeholder {
            Placeholder::ClassName => Cow::Borrowed(error.class_name()),
            Placeholder::Message => Cow::Borrowed(error.message()),
            Placeholder::Code => Cow::Owned(error.code().to_string()),
            Placeholder::File => Cow::Borrowed(error.location().file()),
            Placeholder::Line => Cow::Owned(error.location().line().to_string()),
            Placeholder::Stack => Cow::Borrowed(error.stack()),
            Placeholder::Previous => Cow::Borrowed(previous.unwrap_or("")),
        })
    }
}
