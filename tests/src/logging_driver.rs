use moniker_core::{
    driver::{Driver, Operation, Response},
    Result,
};
use std::sync::{Arc, Mutex};

/// A driver wrapper that logs all operations for testing purposes
#[derive(Debug)]
pub struct LoggingDriver {
    /// The underlying driver that actually executes operations
    inner: Box<dyn Driver>,

    /// Log of all operations executed through this driver
    /// Using Arc<Mutex> for thread-safe access from tests
    ops_log: Arc<Mutex<Vec<DriverOp>>>,
}

#[derive(Debug)]
pub struct DriverOp {
    pub operation: Operation,

    /// `Err` holds the rendered error; the error itself stays with the caller
    pub response: std::result::Result<Response, String>,
}

impl LoggingDriver {
    pub fn new(driver: impl Driver) -> Self {
        Self {
            inner: Box::new(driver),
            ops_log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<DriverOp>>> {
        self.ops_log.clone()
    }
}

impl Driver for LoggingDriver {
    fn exec(&self, operation: Operation) -> Result<Response> {
        // Clone the operation for logging
        let operation_clone = operation.clone();

        let response = self.inner.exec(operation);

        let driver_op = DriverOp {
            operation: operation_clone,
            response: match &response {
                Ok(response) => Ok(response.clone()),
                Err(err) => Err(err.to_string()),
            },
        };

        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(driver_op);

        response
    }
}
