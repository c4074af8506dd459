pub mod config;
pub mod error;
pub mod flags;
pub mod shell;

pub mod core;
pub mod highlight;
pub mod input;
pub mod process;

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;
    use std::io::{self, Write};
    use std::rc::Rc;

    use crate::core::env::EnvironmentTable;
    use crate::core::state::{Console, ExecutionContext};
    use crate::input::History;

    /// A writer whose bytes stay inspectable after it is boxed into a console.
    #[derive(Clone, Default)]
    pub struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl SharedBuf {
        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Non-interactive context with an empty environment and in-memory history.
    pub fn context(out: &SharedBuf, err: &SharedBuf) -> ExecutionContext {
        let console = Console::new(Box::new(out.clone()), Box::new(err.clone()));
        ExecutionContext::new("chainsh", false, History::in_memory(16), console)
            .with_env(EnvironmentTable::new())
    }
}
