//! Atlas MCP Server
//!
//! Disk usage, large file and system health tools over stdio.
//!
//! Configuration is read from `ATLAS_CONFIG_PATH` or the standard
//! locations, see [`atlas_mcp::Config::load`].

use atlas_mcp::AtlasMcpServer;

mcp_common::serve_stdio!(AtlasMcpServer, "atlas_mcp");
