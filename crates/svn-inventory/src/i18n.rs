// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! User-facing text in English and Simplified Chinese
//!
//! A [`Catalog`] is built from a [`Language`] and handed to everything that
//! produces messages for the user. Switching language means building a new
//! catalog; there is no process-wide dictionary.

use std::fmt::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Interface language
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Language {
    /// English
    #[default]
    #[serde(rename = "en_US")]
    #[value(name = "en", alias = "en_US")]
    En,
    /// Simplified Chinese
    #[serde(rename = "zh_CN")]
    #[value(name = "zh", alias = "zh_CN")]
    Zh,
}

impl Language {
    /// Locale code such as `en_US`
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en_US",
            Self::Zh => "zh_CN",
        }
    }

    /// Catalog for this language
    #[must_use]
    pub fn catalog(self) -> Catalog {
        Catalog::new(self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A required input of an export run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Repository URL
    Url,
    /// Account name
    Username,
    /// Account password
    Password,
    /// Workbook destination
    Output,
}

// ============================================================================
// String tables
// ============================================================================

struct Strings {
    field_url: &'static str,
    field_username: &'static str,
    field_password: &'static str,
    field_output: &'static str,
    missing_fields: &'static str,
    progress: &'static str,
    recent_urls: &'static str,
    no_recent_urls: &'static str,

    starting_export: &'static str,
    executing_command: &'static str,
    command_failed: &'static str,
    error_message: &'static str,
    command_no_output: &'static str,
    command_success: &'static str,
    encoding_retry: &'static str,
    parse_failed: &'static str,
    file_list_success: &'static str,
    files_found: &'static str,
    creating_workbook: &'static str,
    saving_workbook: &'static str,
    workbook_saved: &'static str,
    export_success: &'static str,
    run_failed: &'static str,

    tool_not_found: &'static str,
    invalid_url: &'static str,
    no_output: &'static str,
    blank_listing: &'static str,
    encoding_failure: &'static str,
    no_files: &'static str,
    process_failure: &'static str,
    write_failure: &'static str,
    invalid_filter: &'static str,
    busy: &'static str,
    cancelled: &'static str,
    general: &'static str,
}

const EN_US: Strings = Strings {
    field_url: "SVN URL",
    field_username: "Username",
    field_password: "Password",
    field_output: "Excel save location",
    missing_fields: "The following information is incomplete: {fields}",
    progress: "Files processed: {count}",
    recent_urls: "Recent SVN URLs:",
    no_recent_urls: "No recent SVN URLs",

    starting_export: "Starting SVN information export...",
    executing_command: "Executing SVN command: {command}",
    command_failed: "Command execution failed, return code: {code}",
    error_message: "Error message: {error}",
    command_no_output: "Command executed successfully but no output",
    command_success: "Command executed successfully",
    encoding_retry: "Encoding error, trying with different encoding...",
    parse_failed: "Failed to parse line: {line} - {error}",
    file_list_success: "Successfully retrieved SVN file list",
    files_found: "Found {count} files",
    creating_workbook: "Starting to create Excel file...",
    saving_workbook: "Saving Excel file to: {path}",
    workbook_saved: "Excel file saved successfully",
    export_success: "Successfully exported {count} file information to Excel",
    run_failed: "SVN operation failed: {error}",

    tool_not_found: "SVN command line tool not detected. Please install TortoiseSVN and ensure the command line tool is added to system PATH.",
    invalid_url: "Invalid SVN URL format, must start with http://, https://, svn:// or file:///",
    no_output: "SVN command executed successfully but returned no output, please check if URL is correct",
    blank_listing: "SVN command returned no output, please check if URL is correct",
    encoding_failure: "Unable to properly handle Chinese encoding in SVN output",
    no_files: "No matching files found",
    process_failure: "SVN error: {error}",
    write_failure: "Could not write Excel file {path}: {error}",
    invalid_filter: "Invalid file format filter: {error}",
    busy: "An export is already running",
    cancelled: "Export cancelled",
    general: "Error: {error}",
};

const ZH_CN: Strings = Strings {
    field_url: "SVN地址",
    field_username: "用户名",
    field_password: "密码",
    field_output: "Excel保存位置",
    missing_fields: "以下信息未填写完整：{fields}",
    progress: "已处理文件进度：{count}",
    recent_urls: "最近使用的SVN地址：",
    no_recent_urls: "没有最近使用的SVN地址",

    starting_export: "开始导出SVN信息...",
    executing_command: "执行SVN命令: {command}",
    command_failed: "命令执行失败，返回码: {code}",
    error_message: "错误信息: {error}",
    command_no_output: "命令执行成功但没有输出",
    command_success: "命令执行成功",
    encoding_retry: "编码错误，尝试使用不同的编码重新执行...",
    parse_failed: "解析行失败: {line} - {error}",
    file_list_success: "成功获取SVN文件列表",
    files_found: "共找到 {count} 个文件",
    creating_workbook: "开始创建Excel文件...",
    saving_workbook: "正在保存Excel文件到: {path}",
    workbook_saved: "Excel文件保存成功",
    export_success: "成功导出 {count} 个文件信息到Excel",
    run_failed: "SVN操作失败: {error}",

    tool_not_found: "未检测到SVN命令行工具，请先安装TortoiseSVN并确保将命令行工具添加到系统PATH中。",
    invalid_url: "SVN URL格式不正确，必须以 http://, https://, svn:// 或 file:/// 开头",
    no_output: "SVN命令执行成功但没有返回任何输出，请检查URL是否正确",
    blank_listing: "SVN命令没有返回任何输出，请检查URL是否正确",
    encoding_failure: "无法正确处理SVN输出的中文编码",
    no_files: "未找到任何匹配的文件",
    process_failure: "SVN错误: {error}",
    write_failure: "无法写入Excel文件 {path}: {error}",
    invalid_filter: "文件格式过滤无效: {error}",
    busy: "已有导出任务正在运行",
    cancelled: "导出已取消",
    general: "错误: {error}",
};

/// Substitute `{name}` placeholders in `template`
///
/// Substituted values are never scanned again, so a value that looks like a
/// placeholder is kept as written.
fn fill(template: &str, args: &[(&str, &dyn fmt::Display)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            args.iter()
                .find(|(arg, _)| *arg == name)
                .map(|(_, value)| (close, value))
        });
        match value {
            Some((close, value)) => {
                // Writing to a String cannot fail
                let _ = write!(out, "{value}");
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

// ============================================================================
// Catalog
// ============================================================================

/// Translated messages for one language
#[derive(Clone, Copy)]
pub struct Catalog {
    language: Language,
    strings: &'static Strings,
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("language", &self.language)
            .finish()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl Catalog {
    /// Build the catalog for `language`
    #[must_use]
    pub fn new(language: Language) -> Self {
        let strings = match language {
            Language::En => &EN_US,
            Language::Zh => &ZH_CN,
        };
        Self { language, strings }
    }

    /// Language of this catalog
    #[must_use]
    pub fn language(&self) -> Language {
        self.language
    }

    /// Display name of a required field
    #[must_use]
    pub fn field(&self, field: Field) -> &'static str {
        match field {
            Field::Url => self.strings.field_url,
            Field::Username => self.strings.field_username,
            Field::Password => self.strings.field_password,
            Field::Output => self.strings.field_output,
        }
    }

    /// List the fields left empty
    #[must_use]
    pub fn missing_fields(&self, fields: &[Field]) -> String {
        let names = fields
            .iter()
            .map(|f| self.field(*f))
            .collect::<Vec<_>>()
            .join(", ");
        fill(self.strings.missing_fields, &[("fields", &names)])
    }

    /// Progress counter text
    #[must_use]
    pub fn progress(&self, count: usize) -> String {
        fill(self.strings.progress, &[("count", &count)])
    }

    /// Heading for the recent URL list
    #[must_use]
    pub fn recent_urls(&self) -> &'static str {
        self.strings.recent_urls
    }

    /// Shown when no URL has been used yet
    #[must_use]
    pub fn no_recent_urls(&self) -> &'static str {
        self.strings.no_recent_urls
    }

    // ------------------------------------------------------------------------
    // Run log
    // ------------------------------------------------------------------------

    /// A run has started
    #[must_use]
    pub fn starting_export(&self) -> &'static str {
        self.strings.starting_export
    }

    /// The (masked) command line about to run
    #[must_use]
    pub fn executing_command(&self, command: &str) -> String {
        fill(self.strings.executing_command, &[("command", &command)])
    }

    /// The command exited unsuccessfully
    #[must_use]
    pub fn command_failed(&self, code: i32) -> String {
        fill(self.strings.command_failed, &[("code", &code)])
    }

    /// Error text reported by the command
    #[must_use]
    pub fn error_message(&self, error: &str) -> String {
        fill(self.strings.error_message, &[("error", &error)])
    }

    /// The command wrote nothing
    #[must_use]
    pub fn command_no_output(&self) -> &'static str {
        self.strings.command_no_output
    }

    /// The command finished successfully
    #[must_use]
    pub fn command_success(&self) -> &'static str {
        self.strings.command_success
    }

    /// Output was re-read with the fallback encoding
    #[must_use]
    pub fn encoding_retry(&self) -> &'static str {
        self.strings.encoding_retry
    }

    /// A listing line was skipped
    #[must_use]
    pub fn parse_failed(&self, line: &str, error: &dyn fmt::Display) -> String {
        fill(self.strings.parse_failed, &[("line", &line), ("error", error)])
    }

    /// The listing was captured
    #[must_use]
    pub fn file_list_success(&self) -> &'static str {
        self.strings.file_list_success
    }

    /// Number of entries accepted
    #[must_use]
    pub fn files_found(&self, count: usize) -> String {
        fill(self.strings.files_found, &[("count", &count)])
    }

    /// Workbook creation has started
    #[must_use]
    pub fn creating_workbook(&self) -> &'static str {
        self.strings.creating_workbook
    }

    /// Workbook is being written to `path`
    #[must_use]
    pub fn saving_workbook(&self, path: &Path) -> String {
        fill(self.strings.saving_workbook, &[("path", &path.display())])
    }

    /// Workbook was written
    #[must_use]
    pub fn workbook_saved(&self) -> &'static str {
        self.strings.workbook_saved
    }

    /// Final success message
    #[must_use]
    pub fn export_success(&self, count: usize) -> String {
        fill(self.strings.export_success, &[("count", &count)])
    }

    /// A run ended with `error`
    #[must_use]
    pub fn run_failed(&self, error: &str) -> String {
        fill(self.strings.run_failed, &[("error", &error)])
    }

    // ------------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------------

    /// The command-line client is not installed
    #[must_use]
    pub fn tool_not_found(&self) -> &'static str {
        self.strings.tool_not_found
    }

    /// The URL has no supported scheme
    #[must_use]
    pub fn invalid_url(&self) -> &'static str {
        self.strings.invalid_url
    }

    /// Both output streams were empty
    #[must_use]
    pub fn no_output(&self) -> &'static str {
        self.strings.no_output
    }

    /// The listing text was blank
    #[must_use]
    pub fn blank_listing(&self) -> &'static str {
        self.strings.blank_listing
    }

    /// Neither encoding could decode the output
    #[must_use]
    pub fn encoding_failure(&self) -> &'static str {
        self.strings.encoding_failure
    }

    /// No entry survived parsing and filtering
    #[must_use]
    pub fn no_files(&self) -> &'static str {
        self.strings.no_files
    }

    /// The client reported `error`
    #[must_use]
    pub fn process_failure(&self, error: &str) -> String {
        fill(self.strings.process_failure, &[("error", &error)])
    }

    /// The workbook could not be written
    #[must_use]
    pub fn write_failure(&self, path: &Path, error: &dyn fmt::Display) -> String {
        fill(
            self.strings.write_failure,
            &[("path", &path.display()), ("error", error)],
        )
    }

    /// A filter pattern did not compile
    #[must_use]
    pub fn invalid_filter(&self, error: &dyn fmt::Display) -> String {
        fill(self.strings.invalid_filter, &[("error", error)])
    }

    /// A run is already active
    #[must_use]
    pub fn busy(&self) -> &'static str {
        self.strings.busy
    }

    /// The run was cancelled
    #[must_use]
    pub fn cancelled(&self) -> &'static str {
        self.strings.cancelled
    }

    /// Any other failure
    #[must_use]
    pub fn general(&self, error: &dyn fmt::Display) -> String {
        fill(self.strings.general, &[("error", error)])
    }
}
