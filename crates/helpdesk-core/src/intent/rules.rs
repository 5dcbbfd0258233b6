//! Built-in rule table for the help assistant.
//!
//! Order matters: language-pair rules sit above the generic conversion rule
//! so that "convert my cobol code to python" gets the COBOL walkthrough
//! rather than the converter overview.

use super::{Predicate, Rule, all, any, any_of, contains};

pub const COBOL_TO_PYTHON: &str = "cobol_to_python";
pub const COBOL_TO_JAVA: &str = "cobol_to_java";
pub const FORTRAN_TO_MODERN: &str = "fortran_to_modern";
pub const VB_TO_DOTNET: &str = "vb_to_dotnet";
pub const PLI_TO_MODERN: &str = "pli_to_modern";
pub const RPG_TO_MODERN: &str = "rpg_to_modern";
pub const CODE_CONVERSION: &str = "code_conversion";
pub const DATABASE_CONVERSION: &str = "database_conversion";
pub const DOCUMENTATION: &str = "documentation";
pub const QUALITY_ANALYSIS: &str = "quality_analysis";
pub const BUSINESS_LOGIC: &str = "business_logic";
pub const PROJECT_MIGRATION: &str = "project_migration";
pub const GETTING_STARTED: &str = "getting_started";
pub const CONFIGURATION: &str = "configuration";
pub const FILE_UPLOAD: &str = "file_upload";
pub const FEATURES: &str = "features";
pub const HELP: &str = "help";
pub const DEFAULT_RULE: &str = "default";

const COBOL_TO_PYTHON_RESPONSE: &str = "**Converting COBOL to Python**\n\n\
Here is how to convert a COBOL program with the **Code Language Converter**:\n\
1. Open the **Code Language Converter** from the sidebar\n\
2. Upload your .cob or .cbl files (copybooks with .cpy are picked up automatically)\n\
3. Select **COBOL** as the source language and **Python** as the target\n\
4. Click **Convert** and review the side-by-side output\n\n\
**Tips:**\n\
- PIC clauses are mapped to Python types, with `Decimal` used for COMP-3 fields\n\
- PERFORM paragraphs become functions, and file sections become data classes\n\
- Run the **Code Quality Analyzer** on the result to spot anything that needs a manual pass";

const COBOL_TO_JAVA_RESPONSE: &str = "**Converting COBOL to Java**\n\n\
1. Open the **Code Language Converter**\n\
2. Upload your .cob or .cbl source together with any copybooks\n\
3. Choose **COBOL** as the source and **Java** as the target\n\
4. Pick a package name for the generated classes and click **Convert**\n\n\
Each program becomes a Java class, record layouts become POJOs, and packed decimals \
are mapped to `BigDecimal` so arithmetic stays exact.";

const FORTRAN_TO_MODERN_RESPONSE: &str = "**Converting Fortran**\n\n\
1. Upload your .f, .f77 or .f90 files to the **Code Language Converter**\n\
2. Select **Fortran** as the source and **Python** or **C++** as the target\n\
3. Click **Convert**\n\n\
Array code is translated to NumPy operations when targeting Python and to \
`std::vector` when targeting C++. COMMON blocks are turned into module-level state \
that you should review before production use.";

const VB_TO_DOTNET_RESPONSE: &str = "**Converting Visual Basic to C#**\n\n\
1. Upload your .bas, .cls and .frm files to the **Code Language Converter**\n\
2. Select **Visual Basic 6** as the source and **C#** as the target\n\
3. Click **Convert**\n\n\
Forms are translated to WinForms classes, `On Error` handlers become try/catch blocks, \
and late-bound `Variant` usage is flagged for review.";

const PLI_TO_MODERN_RESPONSE: &str = "**Converting PL/I**\n\n\
1. Upload your .pli or .pl1 files, plus any %INCLUDE members, to the **Code Language Converter**\n\
2. Select **PL/I** as the source and **Java**, **C#** or **Python** as the target\n\
3. Click **Convert**\n\n\
Procedures become methods, structures become classes, and FIXED DECIMAL fields are mapped \
to exact decimal types. ON-units are translated to exception handlers and flagged for review.";

const RPG_TO_MODERN_RESPONSE: &str = "**Converting RPG**\n\n\
1. Upload your .rpg or .rpgle source members to the **Code Language Converter**\n\
2. Select **RPG** as the source and **Java**, **C#** or **Python** as the target\n\
3. Click **Convert**\n\n\
Fixed-format and free-format RPG are both supported. The program cycle is rewritten as \
explicit loops, and externally described files become data classes. Run the \
**Database Schema Converter** on the DDS files to move the tables as well.";

const CODE_CONVERSION_RESPONSE: &str = "**Code Language Converter**\n\n\
The converter translates legacy source code into a modern language while keeping \
its behaviour intact.\n\n\
**How to use it:**\n\
1. Open the **Code Language Converter** from the sidebar\n\
2. Upload a source file or paste your code into the editor\n\
3. Choose the source and target languages\n\
4. Click **Convert** and review the result side by side\n\n\
Supported sources include COBOL, Fortran, Visual Basic 6, PL/I and RPG. \
Targets include Python, Java, C# and C++.";

const DATABASE_CONVERSION_RESPONSE: &str = "**Database Schema Converter**\n\n\
1. Open the **Database Schema Converter**\n\
2. Upload your DDL scripts, or copybooks describing VSAM and IMS record layouts\n\
3. Choose the target database (PostgreSQL, MySQL, SQL Server or Oracle)\n\
4. Click **Convert** to get the new schema plus migration scripts\n\n\
Data types are mapped automatically and any lossy conversion is listed in the report \
so you can decide how to handle it.";

const DOCUMENTATION_RESPONSE: &str = "**Documentation Generator**\n\n\
1. Open the **Documentation Generator**\n\
2. Upload the files or the project you want documented\n\
3. Pick an output format: Markdown, HTML or PDF\n\
4. Click **Generate**\n\n\
The generated documentation covers program structure, data flow, call graphs and \
a plain-language summary of what each module does.";

const QUALITY_ANALYSIS_RESPONSE: &str = "**Code Quality Analyzer**\n\n\
Upload your code to the **Code Quality Analyzer** to get:\n\
- **Complexity metrics** such as cyclomatic complexity and nesting depth\n\
- **Maintainability index** per file and per module\n\
- **Dead code** and duplicated block detection\n\
- **Technical debt** estimates with prioritized recommendations\n\n\
Reports can be exported as PDF or CSV to share with your team.";

const BUSINESS_LOGIC_RESPONSE: &str = "**Business Logic Extractor**\n\n\
1. Open the **Business Logic Extractor**\n\
2. Upload the legacy programs you want analyzed\n\
3. Click **Extract**\n\n\
The extractor identifies business rules buried in the code (calculations, validations \
and decision tables) and describes them in plain language, with links back to the \
exact source lines. This is a good first step before any migration.";

const PROJECT_MIGRATION_RESPONSE: &str = "**Migrating a Whole Project**\n\n\
1. Create a new project from the **Projects** page\n\
2. Upload your codebase as a .zip archive or connect a Git repository\n\
3. Run the **Business Logic Extractor** and **Code Quality Analyzer** for an assessment\n\
4. Choose target languages and databases in the **Migration Plan**\n\
5. Convert module by module and track progress on the project dashboard\n\n\
Converting incrementally keeps each step reviewable and lets you test as you go.";

const GETTING_STARTED_RESPONSE: &str = "**Getting Started**\n\n\
Welcome! A typical first session looks like this:\n\
1. **Upload** a legacy source file or a zipped project\n\
2. Run the **Code Quality Analyzer** to see what you are working with\n\
3. Use the **Business Logic Extractor** to understand the rules in the code\n\
4. Convert with the **Code Language Converter**\n\
5. Generate documentation for the new code\n\n\
Ask me about any of these steps for more detail.";

const CONFIGURATION_RESPONSE: &str = "**Configuration and Setup**\n\n\
Open **Settings** from your profile menu to:\n\
- Choose default source and target languages\n\
- Set naming conventions and formatting preferences for generated code\n\
- Manage team members and project permissions\n\
- Connect Git repositories for importing and exporting code\n\n\
AI-assisted answers are enabled once your administrator adds the Azure OpenAI \
endpoint and API key to the platform configuration.";

const FILE_UPLOAD_RESPONSE: &str = "**Uploading Files**\n\n\
- Drag and drop files onto any tool, or click **Upload** to browse\n\
- Single files up to 10 MB are supported; larger codebases can be uploaded as .zip\n\
- Supported extensions include .cob, .cbl, .cpy, .f, .f90, .bas, .cls, .frm, .pli, .rpg and .sql\n\n\
Uploaded files stay in your workspace so you can reuse them across tools.";

const FEATURES_RESPONSE: &str = "**What This Platform Can Do**\n\n\
- **Code Language Converter**: translate COBOL, Fortran, VB6 and more into modern languages\n\
- **Database Schema Converter**: move legacy data definitions to modern databases\n\
- **Documentation Generator**: produce readable documentation from source code\n\
- **Code Quality Analyzer**: measure complexity, maintainability and technical debt\n\
- **Business Logic Extractor**: surface the business rules hidden in legacy code\n\
- **Project Migration**: plan and track the migration of an entire codebase\n\n\
Ask me about any feature to learn how to use it.";

const HELP_RESPONSE: &str = "**How Can I Help?**\n\n\
I can answer questions about:\n\
- Converting code between languages\n\
- Converting database schemas\n\
- Generating documentation\n\
- Analyzing code quality\n\
- Extracting business logic\n\
- Migrating whole projects\n\n\
Try asking something like **\"How do I convert COBOL to Python?\"**";

/// Catch-all answer when no rule matches.
pub const DEFAULT_RESPONSE: &str = "I'm not sure I understood that.\n\n\
I can help you with **code conversion**, **database schema conversion**, \
**documentation generation**, **code quality analysis**, **business logic extraction** \
and **project migration**.\n\n\
Try asking **\"What can this platform do?\"** or **\"How do I get started?\"**";

/// A modern target language or a conversion verb.
fn modern_target() -> Predicate {
    any_of(&[
        "java", "python", "c#", "csharp", "c++", "cpp", ".net", "dotnet", "convert", "migrat",
        "translat", "moderniz",
    ])
}

/// The built-in rule table, highest priority first.
pub fn builtin_rules() -> Vec<Rule> {
    vec![
        Rule::new(
            COBOL_TO_PYTHON,
            all(vec![contains("cobol"), contains("python")]),
            COBOL_TO_PYTHON_RESPONSE,
        ),
        Rule::new(
            COBOL_TO_JAVA,
            all(vec![contains("cobol"), contains("java")]),
            COBOL_TO_JAVA_RESPONSE,
        ),
        Rule::new(
            FORTRAN_TO_MODERN,
            all(vec![contains("fortran"), any_of(&["python", "c++", "cpp"])]),
            FORTRAN_TO_MODERN_RESPONSE,
        ),
        Rule::new(
            VB_TO_DOTNET,
            all(vec![
                any_of(&["vb6", "visual basic"]),
                any_of(&["c#", "csharp", ".net", "dotnet"]),
            ]),
            VB_TO_DOTNET_RESPONSE,
        ),
        Rule::new(
            PLI_TO_MODERN,
            all(vec![any_of(&["pl/i", "pl/1", "pl1"]), modern_target()]),
            PLI_TO_MODERN_RESPONSE,
        ),
        Rule::new(
            RPG_TO_MODERN,
            all(vec![any_of(&["rpg", "rpgle"]), modern_target()]),
            RPG_TO_MODERN_RESPONSE,
        ),
        Rule::new(
            CODE_CONVERSION,
            any(vec![
                all(vec![
                    contains("code"),
                    any_of(&["convert", "migrat", "translat", "transform"]),
                ]),
                contains("language convert"),
            ]),
            CODE_CONVERSION_RESPONSE,
        ),
        Rule::new(
            DATABASE_CONVERSION,
            any_of(&["database", "schema", "sql", "db2", "stored procedure", "vsam"]),
            DATABASE_CONVERSION_RESPONSE,
        ),
        Rule::new(
            DOCUMENTATION,
            any_of(&["document", "docs", "readme"]),
            DOCUMENTATION_RESPONSE,
        ),
        Rule::new(
            QUALITY_ANALYSIS,
            any_of(&[
                "quality",
                "metric",
                "complexity",
                "maintainab",
                "technical debt",
                "code smell",
            ]),
            QUALITY_ANALYSIS_RESPONSE,
        ),
        Rule::new(
            BUSINESS_LOGIC,
            any(vec![
                any_of(&["business logic", "business rule"]),
                all(vec![contains("extract"), any_of(&["logic", "rule"])]),
            ]),
            BUSINESS_LOGIC_RESPONSE,
        ),
        Rule::new(
            PROJECT_MIGRATION,
            all(vec![
                any_of(&["project", "application", "entire", "whole", "codebase", "repositor"]),
                any_of(&["migrat", "convert", "moderniz", "move"]),
            ]),
            PROJECT_MIGRATION_RESPONSE,
        ),
        Rule::new(
            GETTING_STARTED,
            any_of(&[
                "get started",
                "getting started",
                "where do i start",
                "how do i start",
                "begin",
                "first step",
                "new here",
                "tutorial",
            ]),
            GETTING_STARTED_RESPONSE,
        ),
        Rule::new(
            CONFIGURATION,
            any_of(&["config", "setup", "set up", "setting", "api key", "install"]),
            CONFIGURATION_RESPONSE,
        ),
        Rule::new(
            FILE_UPLOAD,
            any_of(&["upload", "file", "attach", "drag"]),
            FILE_UPLOAD_RESPONSE,
        ),
        Rule::new(
            FEATURES,
            any_of(&[
                "feature",
                "what can",
                "capabilit",
                "what do you do",
                "what does this",
                "platform do",
                "tools",
            ]),
            FEATURES_RESPONSE,
        ),
        Rule::new(
            HELP,
            any_of(&["help", "support", "how do i", "how to"]),
            HELP_RESPONSE,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::super::IntentMatcher;
    use super::*;

    fn rule_for(text: &str) -> &'static str {
        IntentMatcher::default().matching_rule(text).name
    }

    #[test]
    fn test_cobol_python_beats_generic_conversion() {
        let matcher = IntentMatcher::default();
        let question = "How do I convert my cobol code to python?";

        assert_eq!(matcher.matching_rule(question).name, COBOL_TO_PYTHON);
        let answer = matcher.classify(question);
        assert!(answer.contains(".cob or .cbl"));
        assert!(!answer.contains("Supported sources include"));
    }

    #[test]
    fn test_generic_code_conversion() {
        assert_eq!(rule_for("Can I convert this code to Java?"), CODE_CONVERSION);
        assert_eq!(rule_for("code migration options"), CODE_CONVERSION);
    }

    #[test]
    fn test_language_pairs() {
        assert_eq!(rule_for("COBOL to Java please"), COBOL_TO_JAVA);
        assert_eq!(rule_for("fortran into c++"), FORTRAN_TO_MODERN);
        assert_eq!(rule_for("Moving Visual Basic apps to C#"), VB_TO_DOTNET);
        assert_eq!(rule_for("How do I convert PL/I to Java?"), PLI_TO_MODERN);
        assert_eq!(rule_for("How do I convert my PL/I code to python?"), PLI_TO_MODERN);
        assert_eq!(rule_for("convert my RPG program to C#"), RPG_TO_MODERN);
        assert_eq!(rule_for("RPGLE to java"), RPG_TO_MODERN);
    }

    #[test]
    fn test_legacy_language_alone_is_not_a_pair() {
        assert_eq!(rule_for("what is rpg"), DEFAULT_RULE);
        assert_eq!(rule_for("apply the multiplication"), DEFAULT_RULE);
    }

    #[test]
    fn test_features_overview() {
        let matcher = IntentMatcher::default();
        let answer = matcher.classify("what can this platform do");

        assert_eq!(matcher.matching_rule("what can this platform do").name, FEATURES);
        assert!(answer.contains("Code Language Converter"));
        assert!(answer.contains("Business Logic Extractor"));
    }

    #[test]
    fn test_each_group_is_reachable() {
        assert_eq!(rule_for("migrate my oracle database"), DATABASE_CONVERSION);
        assert_eq!(rule_for("generate documentation"), DOCUMENTATION);
        assert_eq!(rule_for("show me complexity metrics"), QUALITY_ANALYSIS);
        assert_eq!(rule_for("extract the business rules"), BUSINESS_LOGIC);
        assert_eq!(rule_for("migrate the entire project"), PROJECT_MIGRATION);
        assert_eq!(rule_for("how do I get started?"), GETTING_STARTED);
        assert_eq!(rule_for("where are the settings"), CONFIGURATION);
        assert_eq!(rule_for("how big can an upload be"), FILE_UPLOAD);
        assert_eq!(rule_for("list the features"), FEATURES);
        assert_eq!(rule_for("help"), HELP);
        assert_eq!(rule_for("banana"), DEFAULT_RULE);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(rule_for("WHAT CAN THIS PLATFORM DO"), FEATURES);
        assert_eq!(rule_for("CoBoL and PyThOn"), COBOL_TO_PYTHON);
    }

    #[test]
    fn test_classify_is_total() {
        let matcher = IntentMatcher::default();
        let long = "lorem ipsum ".repeat(10_000);
        for input in ["", "   ", "\n\t", "¿Qué puedes hacer?", "日本語のテキスト", long.as_str()] {
            let answer = matcher.classify(input);
            assert!(!answer.is_empty());
            assert_eq!(answer, matcher.classify(input));
        }
        assert_eq!(matcher.classify(""), DEFAULT_RESPONSE);
    }

    #[test]
    fn test_rule_names_in_priority_order() {
        let names = IntentMatcher::default().rule_names();
        assert_eq!(names.first(), Some(&COBOL_TO_PYTHON));
        assert_eq!(names.last(), Some(&DEFAULT_RULE));

        let position = |name| names.iter().position(|n| *n == name).unwrap();
        assert!(position(COBOL_TO_PYTHON) < position(CODE_CONVERSION));
        assert!(position(VB_TO_DOTNET) < position(PLI_TO_MODERN));
        assert!(position(RPG_TO_MODERN) < position(CODE_CONVERSION));
        assert!(position(CODE_CONVERSION) < position(DATABASE_CONVERSION));
        assert!(position(FEATURES) < position(HELP));
        assert_eq!(names.len(), 18);
    }
}
