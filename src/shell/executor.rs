use crate::core::commands::{Dispatch, Flow};

pub(crate) trait SegmentHandler {
    fn execute_segment(&mut self, segment: &str) -> Flow;
}

impl SegmentHandler for super::Shell {
    fn execute_segment(&mut self, segment: &str) -> Flow {
        let argv = self.tokenizer.split_args(segment);
        if argv.is_empty() {
            return Flow::Continue(self.ctx.last_status);
        }

        let argv = self.expander.expand(
            &self.ctx.aliases,
            &self.ctx.env,
            self.ctx.last_status,
            argv,
        );
        if argv.is_empty() {
            return Flow::Continue(self.ctx.last_status);
        }

        let flow = match self.dispatcher.dispatch(&mut self.ctx, &argv) {
            Dispatch::Builtin(flow) => flow,
            Dispatch::NotBuiltin => Flow::Continue(self.run_external(&argv)),
        };

        self.ctx.last_status = flow.status();
        flow
    }
}

impl super::Shell {
    fn run_external(&mut self, argv: &[String]) -> i32 {
        match self.runner.run(&mut self.ctx, argv) {
            Ok(status) => status,
            Err(e) => {
                if e.is_reported() {
                    self.ctx.report(&argv[0], &e.to_string());
                } else {
                    tracing::debug!(command = %argv[0], error = %e, "spawn failed");
                }
                e.status()
            }
        }
    }
}
