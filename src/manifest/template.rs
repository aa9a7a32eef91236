//! Package.swift template
//!
//! Pure text assembly: takes the rendered lines and the package name, returns the file content.

/// SwiftPM tools version written in the generated header
pub const SWIFT_TOOLS_VERSION: &str = "5.2";

/// Placeholder source file so the target has something to compile
pub const EMPTY_SOURCE_FILENAME: &str = "Empty.swift";

/// Indentation of entries inside the package `dependencies: [...]` list
const PACKAGE_DEPENDENCY_INDENT: &str = "        ";

/// Indentation of entries inside the target `dependencies: [...]` list
const TARGET_DEPENDENCY_INDENT: &str = "                ";

/// Renders the complete Package.swift content
pub fn render_package_swift(
    package_name: &str,
    warning: &str,
    dependency_lines: &[String],
    target_lines: &[String],
) -> String {
    let dependencies = indent_lines(dependency_lines, PACKAGE_DEPENDENCY_INDENT);
    let targets = indent_lines(target_lines, TARGET_DEPENDENCY_INDENT);

    format!(
        r#"// swift-tools-version:{tools}
// The swift-tools-version declares the minimum version of Swift required to build this package.
// https://github.com/apple/swift-package-manager/blob/master/Documentation/PackageDescription.md
// Generated by cartfile-to-package

import PackageDescription
{warning}
let package = Package(
    name: "{name}",
    //platforms: [ .macOS(.v10_10), .iOS(.v8), .tvOS(.v9), .watchOS(.v2), ],
    products: [
        .library(
            name: "{name}",
            type: .dynamic,
            targets: ["{name}"]),
    ],
    dependencies: [
{dependencies}
    ],
    targets: [
        .target(
            name: "{name}",
            dependencies: [
{targets}
            ],
            path: ".",
            sources: ["{empty}"]),
    ]
)
"#,
        tools = SWIFT_TOOLS_VERSION,
        warning = warning,
        name = package_name,
        dependencies = dependencies,
        targets = targets,
        empty = EMPTY_SOURCE_FILENAME,
    )
}

/// Builds the `#warning` block naming targets that are not valid Swift identifiers
///
/// Returns an empty string when there is nothing to report.
pub fn warning_block(names: &[&str]) -> String {
    if names.is_empty() {
        return String::new();
    }

    let concerned: Vec<String> = names.iter().map(|n| format!("    {}", n)).collect();

    format!(
        "#warning(\"\"\"\n\
         Some package(s) have name that might not be correct, you should fix them\n\
         example fixes in both package and target:\n   \
         realm-cocoa -> Realm\n   \
         JWTDecode.swift -> JWTDecode\n\
         Concerned package(s):\n\
         {}\n\
         \"\"\")",
        concerned.join("\n")
    )
}

fn indent_lines(lines: &[String], indent: &str) -> String {
    lines
        .iter()
        .map(|line| format!("{}{}", indent, line))
        .collect::<Vec<_>>()
        .join("\n")
}
