#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use oxide_sql_driver::{
    Connection, Connector, DriverOptions, NativeError, ResultSet, Row,
};
use oxide_sql_oracle::OracleDriver;

/// In-memory connection answering queries from a fixed script.
#[derive(Debug, Default)]
pub struct ScriptedConnection {
    responses: HashMap<String, Result<ResultSet, NativeError>>,
    log: Rc<RefCell<Vec<String>>>,
}

impl ScriptedConnection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returns(mut self, sql: &str, result: ResultSet) -> Self {
        self.responses.insert(sql.to_string(), Ok(result));
        self
    }

    pub fn fails(mut self, sql: &str, error: NativeError) -> Self {
        self.responses.insert(sql.to_string(), Err(error));
        self
    }

    /// Shared handle on the statements executed so far.
    pub fn log(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.log)
    }
}

impl Connection for ScriptedConnection {
    fn query(&self, sql: &str) -> Result<ResultSet, NativeError> {
        self.log.borrow_mut().push(sql.to_string());
        self.responses
            .get(sql)
            .cloned()
            .unwrap_or_else(|| Err(NativeError::new(format!("unexpected query: {sql}")).with_code(900)))
    }
}

/// What a [`ScriptedConnector`] was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectCall {
    pub dsn: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub options: DriverOptions,
}

/// Connector handing out one prepared connection, or failing.
#[derive(Debug)]
pub struct ScriptedConnector {
    connection: RefCell<Option<ScriptedConnection>>,
    failure: Option<NativeError>,
    calls: RefCell<Vec<ConnectCall>>,
}

impl ScriptedConnector {
    pub fn new(connection: ScriptedConnection) -> Self {
        Self {
            connection: RefCell::new(Some(connection)),
            failure: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(error: NativeError) -> Self {
        Self {
            connection: RefCell::new(None),
            failure: Some(error),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ConnectCall> {
        self.calls.borrow().clone()
    }
}

impl Connector for ScriptedConnector {
    type Connection = ScriptedConnection;

    fn connect(
        &self,
        dsn: &str,
        user: Option<&str>,
        password: Option<&str>,
        options: &DriverOptions,
    ) -> Result<ScriptedConnection, NativeError> {
        self.calls.borrow_mut().push(ConnectCall {
            dsn: dsn.to_string(),
            user: user.map(str::to_string),
            password: password.map(str::to_string),
            options: options.clone(),
        });
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        Ok(self.connection.borrow_mut().take().unwrap_or_default())
    }
}

pub fn catalog(entries: &[(&str, &str)]) -> ResultSet {
    ResultSet::new(
        vec!["TABLE_NAME".into(), "TABLE_TYPE".into()],
        entries
            .iter()
            .map(|(name, kind)| Row::from_iter([*name, *kind]))
            .collect(),
    )
}

pub fn driver(connection: ScriptedConnection) -> OracleDriver<ScriptedConnection> {
    OracleDriver::with_connection(connection, DriverOptions::new())
        .unwrap_or_else(|e| panic!("Failed to build driver: {e}"))
}
