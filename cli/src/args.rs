//! Command-line surface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use restful_core::{HttpMethod, Request};
use serde_json::Value;

/// Simple CLI RESTful client for JSONPlaceholder
#[derive(Debug, Parser)]
#[command(name = "restful", version, about)]
pub struct Cli {
    /// Request method
    #[arg(value_enum)]
    pub method: Method,

    /// Request endpoint URI fragment
    pub endpoint: String,

    /// Data to send with the request (JSON format)
    #[arg(short, long, value_parser = parse_json)]
    pub data: Option<Value>,

    /// Output to .json or .csv file (default: dump to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    Get,
    Post,
}

impl From<Method> for HttpMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => HttpMethod::Get,
            Method::Post => HttpMethod::Post,
        }
    }
}

fn parse_json(raw: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(raw)
}

impl Cli {
    pub fn into_request(self) -> Request {
        Request {
            method: self.method.into(),
            endpoint: self.endpoint,
            body: self.data,
            output: self.output,
        }
    }
}
