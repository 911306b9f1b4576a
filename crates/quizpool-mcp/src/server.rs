// Dweve Quizpool - Question pool curation and quiz assembly
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! MCP Server implementation.

use crate::error::{McpError, McpResult};
use crate::protocol::*;
use crate::tools::{execute_tool, get_tools};
use crate::{RESOURCE_NAME, SERVER_DESCRIPTION, SERVER_NAME, VERSION};
use quizpool_core::QuestionBank;
use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Write};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader as AsyncBufReader};
use tracing::{debug, error, info, warn};

/// MCP Server configuration.
#[derive(Debug, Clone)]
pub struct McpServerConfig {
    /// Server name reported in protocol handshake.
    pub name: String,

    /// Server version reported in protocol handshake.
    pub version: String,

    /// Base URI of the pool resource collection.
    ///
    /// Individual entries are addressed as the base followed by their id,
    /// e.g. `quizs://12`.
    pub resource_base_uri: String,
}

impl Default for McpServerConfig {
    fn default() -> Self {
        Self {
            name: SERVER_NAME.to_string(),
            version: VERSION.to_string(),
            resource_base_uri: "quizs://".to_string(),
        }
    }
}

/// Quiz MCP Server.
///
/// Implements the Model Context Protocol (MCP) over JSON-RPC 2.0 on stdio:
///
/// - Tool execution (`getQuizQuestions`, `generateQuiz`)
/// - A browsable resource collection of the visible pool
/// - Protocol lifecycle (initialize, shutdown)
///
/// # Thread Safety
///
/// The question bank is frozen before the server is constructed and only
/// ever read, so it is shared as `Arc<QuestionBank>` without locks. Request
/// handling is sequential via stdio transport.
pub struct McpServer {
    /// Server configuration.
    config: McpServerConfig,

    /// Set to `true` after a successful `initialize` handshake, reset on
    /// `shutdown`.
    initialized: bool,

    /// The frozen question pool.
    bank: Arc<QuestionBank>,
}

impl McpServer {
    /// Create a new MCP server over an already built question bank.
    ///
    /// # Examples
    ///
    /// ```
    /// use quizpool_core::QuestionBank;
    /// use quizpool_mcp::{McpServer, McpServerConfig};
    /// use std::sync::Arc;
    ///
    /// let bank = Arc::new(QuestionBank::from_raw(vec![]));
    /// let server = McpServer::new(McpServerConfig::default(), bank);
    /// assert!(!server.is_initialized());
    /// ```
    pub fn new(config: McpServerConfig, bank: Arc<QuestionBank>) -> Self {
        Self {
            config,
            initialized: false,
            bank,
        }
    }

    /// Create a new MCP server with default config.
    pub fn with_bank(bank: Arc<QuestionBank>) -> Self {
        Self::new(McpServerConfig::default(), bank)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn bank(&self) -> &Arc<QuestionBank> {
        &self.bank
    }

    /// Handle one raw input line.
    ///
    /// Returns the serialized response, or `None` for blank lines and
    /// notifications.
    pub fn handle_line(&mut self, line: &str) -> McpResult<Option<String>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        debug!("Received: {}", line);

        let response = match serde_json::from_str::<Value>(line) {
            Ok(message) => {
                let id = message.get("id").cloned().filter(|id| !id.is_null());
                match serde_json::from_value::<JsonRpcRequest>(message) {
                    Ok(request) => {
                        if request.is_notification() {
                            self.handle_notification(&request);
                            return Ok(None);
                        }
                        self.handle_request(request)
                    }
                    Err(e) => {
                        let err = McpError::InvalidRequest(e.to_string());
                        JsonRpcResponse::error(id, err.code(), err.to_string(), None)
                    }
                }
            }
            Err(e) => JsonRpcResponse::error(None, -32700, format!("Parse error: {}", e), None),
        };

        let response_str = serde_json::to_string(&response)?;
        debug!("Sending: {}", response_str);
        Ok(Some(response_str))
    }

    /// Run the server using stdio transport (synchronous).
    ///
    /// Reads one JSON-RPC request per line from stdin and writes one response
    /// per line to stdout until stdin is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if reading stdin, writing stdout, or serializing a
    /// response fails.
    pub fn run_stdio(&mut self) -> McpResult<()> {
        let stdin = std::io::stdin();
        let mut stdout = std::io::stdout();
        let reader = BufReader::new(stdin.lock());

        info!(
            "Quiz MCP Server starting on stdio ({} questions)",
            self.bank.len()
        );

        for line in reader.lines() {
            let line = line?;
            if let Some(response) = self.handle_line(&line)? {
                writeln!(stdout, "{}", response)?;
                stdout.flush()?;
            }
        }

        Ok(())
    }

    /// Run the server using stdio transport (asynchronous).
    ///
    /// Asynchronous version of [`McpServer::run_stdio`] on the Tokio runtime.
    pub async fn run_stdio_async(&mut self) -> McpResult<()> {
        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();
        let mut reader = AsyncBufReader::new(stdin);

        info!(
            "Quiz MCP Server starting on stdio (async, {} questions)",
            self.bank.len()
        );

        let mut line = String::new();
        loop {
            line.clear();
            match reader.read_line(&mut line).await {
                Ok(0) => break, // EOF
                Ok(_) => {
                    if let Some(response) = self.handle_line(&line)? {
                        stdout.write_all(response.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;
                    }
                }
                Err(e) => {
                    error!("Read error: {}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    fn handle_notification(&mut self, request: &JsonRpcRequest) {
        match request.method.as_str() {
            "notifications/initialized" => info!("Client sent initialized notification"),
            method => debug!("Ignoring notification: {}", method),
        }
    }

    /// Handle a single JSON-RPC request.
    ///
    /// # Supported Methods
    ///
    /// - `initialize` - Protocol handshake with capability negotiation
    /// - `initialized` - Handshake completion (request form)
    /// - `shutdown` - Graceful server shutdown
    /// - `tools/list` - List available quiz tools
    /// - `tools/call` - Execute a specific tool
    /// - `resources/list` - List the pool resource collection
    /// - `resources/read` - Read the pool listing or a single entry
    /// - `ping` - Health check endpoint
    ///
    /// Unknown methods return a "Method not found" error (-32601).
    pub fn handle_request(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        let id = request.id.clone();

        match request.method.as_str() {
            "initialize" => self.handle_initialize(id, request.params),
            "initialized" => {
                info!("Client sent initialized notification");
                JsonRpcResponse::success(id, json!({}))
            }
            "shutdown" => self.handle_shutdown(id),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tools_call(id, request.params),
            "resources/list" => self.handle_resources_list(id),
            "resources/read" => self.handle_resources_read(id, request.params),
            "ping" => JsonRpcResponse::success(id, json!({})),
            method => {
                warn!("Unknown method: {}", method);
                JsonRpcResponse::error(id, -32601, format!("Method not found: {}", method), None)
            }
        }
    }

    fn parse_params<T: for<'de> serde::Deserialize<'de>>(
        params: Option<Value>,
    ) -> Result<T, (i32, String)> {
        match params {
            Some(p) => {
                serde_json::from_value(p).map_err(|e| (-32602, format!("Invalid params: {}", e)))
            }
            None => Err((-32602, "Missing params".to_string())),
        }
    }

    fn to_response<T: serde::Serialize>(id: Option<Value>, result: &T) -> JsonRpcResponse {
        match serde_json::to_value(result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::error(id, -32603, format!("Internal error: {}", e), None),
        }
    }

    /// Handle the `initialize` method for MCP handshake.
    fn handle_initialize(&mut self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let params: InitializeParams = match Self::parse_params(params) {
            Ok(params) => params,
            Err((code, message)) => return JsonRpcResponse::error(id, code, message, None),
        };

        self.initialized = true;
        info!(
            "Server initialized by {} {} (protocol {})",
            params.client_info.name, params.client_info.version, params.protocol_version
        );

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                resources: Some(ResourcesCapability {
                    subscribe: Some(false),
                    list_changed: Some(false),
                }),
            },
            server_info: ServerInfo {
                name: self.config.name.clone(),
                version: self.config.version.clone(),
            },
            instructions: Some(SERVER_DESCRIPTION.to_string()),
        };

        Self::to_response(id, &result)
    }

    /// Handle the `shutdown` method for graceful termination.
    fn handle_shutdown(&mut self, id: Option<Value>) -> JsonRpcResponse {
        info!("Server shutting down");
        self.initialized = false;
        JsonRpcResponse::success(id, json!({}))
    }

    /// Handle the `tools/list` method.
    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        Self::to_response(id, &ListToolsResult { tools: get_tools() })
    }

    /// Handle the `tools/call` method.
    ///
    /// Tool errors (including a rejected oversized quiz request) are returned
    /// as successful responses with `isError: true` to distinguish them from
    /// protocol-level errors. Protocol errors (invalid params) return JSON-RPC
    /// error responses.
    fn handle_tools_call(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let params: CallToolParams = match Self::parse_params(params) {
            Ok(params) => params,
            Err((code, message)) => return JsonRpcResponse::error(id, code, message, None),
        };

        let result = match execute_tool(&params.name, params.arguments, &self.bank) {
            Ok(result) => result,
            Err(e) => {
                warn!("Tool {} failed: {}", params.name, e);
                CallToolResult::error(format!("Error: {}", e))
            }
        };
        Self::to_response(id, &result)
    }

    /// Handle the `resources/list` method.
    ///
    /// The pool is exposed as a single collection resource at the base URI.
    fn handle_resources_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let result = ListResourcesResult {
            resources: vec![Resource {
                uri: self.config.resource_base_uri.clone(),
                name: RESOURCE_NAME.to_string(),
                title: Some("Quiz Questions".to_string()),
                description: Some(
                    "Collection of all available questions from the Life in the UK mock test question pool"
                        .to_string(),
                ),
                mime_type: Some("text/plain".to_string()),
            }],
        };
        Self::to_response(id, &result)
    }

    /// Handle the `resources/read` method.
    ///
    /// Reading the base URI returns one content item per visible pool entry.
    /// Reading `<base><id>` returns that entry alone, if it is visible.
    fn handle_resources_read(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let params: ReadResourceParams = match Self::parse_params(params) {
            Ok(params) => params,
            Err((code, message)) => return JsonRpcResponse::error(id, code, message, None),
        };

        match self.read_resource(&params.uri) {
            Ok(contents) => Self::to_response(id, &ReadResourceResult { contents }),
            Err(e) => JsonRpcResponse::error(id, e.code(), e.to_string(), None),
        }
    }

    fn read_resource(&self, uri: &str) -> McpResult<Vec<ResourceContent>> {
        let base = self.config.resource_base_uri.as_str();

        if uri == base {
            return Ok(self
                .bank
                .browse(base)
                .into_iter()
                .map(|resource| ResourceContent {
                    uri: resource.uri,
                    mime_type: Some("text/plain".to_string()),
                    text: Some(resource.text),
                })
                .collect());
        }

        // Only the canonical decimal form addresses an entry
        let record = uri
            .strip_prefix(base)
            .and_then(|suffix| {
                suffix
                    .parse::<usize>()
                    .ok()
                    .filter(|entry_id| entry_id.to_string() == suffix)
            })
            .filter(|&entry_id| self.bank.is_visible(entry_id))
            .and_then(|entry_id| self.bank.get(entry_id))
            .ok_or_else(|| McpError::ResourceNotFound(uri.to_string()))?;

        Ok(vec![ResourceContent {
            uri: uri.to_string(),
            mime_type: Some("text/plain".to_string()),
            text: Some(record.text.clone()),
        }])
    }
}
