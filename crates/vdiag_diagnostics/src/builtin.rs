//! The builtin diagnostic table.
//!
//! One row per diagnosable condition: symbolic name, stable id, default
//! severity, category, primary template and optional cross-reference
//! template. The macro expands each row into a [`DiagnosticKind`] constant
//! and a [`KindSpec`] in [`BUILTIN`], which [`Catalog::initialize`] loads.
//!
//! Ids are append-only. New kinds take the next free id in their category
//! block; retired kinds keep their row.
//!
//! [`Catalog::initialize`]: crate::Catalog::initialize

use crate::catalog::KindSpec;
use crate::category::Category;
use crate::kind::DiagnosticKind;
use crate::severity::Severity;

macro_rules! diagnostic_table {
    (@xref) => {
        None
    };
    (@xref $xref:literal) => {
        Some($xref)
    };
    ($($name:ident = $id:literal: $severity:ident, $category:ident, $message:literal $(, $xref:literal)?;)*) => {
        #[allow(missing_docs)]
        impl DiagnosticKind {
            $(
                #[doc = $message]
                pub const $name: DiagnosticKind = DiagnosticKind::from_raw($id);
            )*
        }

        /// Every builtin diagnostic kind, in id order.
        pub static BUILTIN: &[KindSpec] = &[
            $(
                KindSpec {
                    kind: DiagnosticKind::$name,
                    name: stringify!($name),
                    severity: Severity::$severity,
                    category: Category::$category,
                    message: $message,
                    cross_reference: diagnostic_table!(@xref $($xref)?),
                },
            )*
        ];
    };
}

// Legacy syntax-severity kinds are `Error` rows; only the `SYNTAX` text reads as a note.
diagnostic_table! {
    // Command line: 1xx
    CMD_FILE_DOES_NOT_EXIST = 100: Fatal, Command, r#"File "{subject}" does not exist"#;
    CMD_CANNOT_OPEN_FILE_FOR_READ = 101: Fatal, Command, r#"Cannot open file "{subject}" for read operation"#;
    CMD_CANNOT_OPEN_FILE_FOR_WRITE = 102: Fatal, Command, r#"Cannot open file "{subject}" for write operation"#;
    CMD_DASH_F_FILE_DOES_NOT_EXIST = 103: Fatal, Command, r#"Command file (-f) "{subject}" does not exist"#;
    CMD_INCLUDE_PATH_DOES_NOT_EXIST = 104: Warning, Command, r#"Include path "{subject}" does not exist"#;
    CMD_LIBRARY_FILE_DOES_NOT_EXIST = 105: Fatal, Command, r#"Library file "{subject}" does not exist"#;
    CMD_LIBRARY_PATH_DOES_NOT_EXIST = 106: Warning, Command, r#"Library path "{subject}" does not exist"#;
    CMD_VERILOG_FILE_DOES_NOT_EXIST = 107: Fatal, Command, r#"Verilog file "{subject}" does not exist"#;
    CMD_PLUS_ARG_IGNORED = 108: Note, Command, r#"Command line argument "{subject}" ignored"#;
    CMD_MINUS_ARG_IGNORED = 109: Warning, Command, r#"Command line argument "{subject}" ignored"#;
    CMD_DEBUG_MISSING_LEVEL = 110: Error, Command, "Option -d is missing the debug level <level>";
    CMD_DEBUG_INCORRECT_LEVEL = 111: Warning, Command, r#"Option -d received incorrect level: "{subject}", level should be 0-3"#;
    CMD_LIBRARY_FILE_MISSING_FILE = 112: Error, Command, r#"Library file option "{subject}" is missing the file name"#;
    CMD_LIBRARY_PATH_MISSING_PATH = 113: Error, Command, r#"Library path option "{subject}" is missing the path name"#;
    CMD_LOG_FILE_MISSING_FILE = 114: Error, Command, r#"Log file option "{subject}" is missing the path name"#;
    CMD_PP_FILE_MISSING_FILE = 115: Error, Command, r#"Output file option "{subject}" is missing the path name"#;
    CMD_MT_MISSING_LEVEL = 116: Error, Command, "Option -mt is missing the number of threads <max_threads>";
    CMD_MT_INCORRECT_LEVEL = 117: Error, Command, r#"Option -mt received incorrect level: "{subject}", level should be 0-64"#;
    CMD_SEPARATE_COMPILATION_UNIT_ON = 118: Info, Command, "Separate compilation-unit mode is on";
    CMD_PP_FILE_MISSING_ODIR = 119: Fatal, Command, "Missing output directory argument for -odir option";
    CMD_PP_CANNOT_CREATE_OUTPUT_DIR = 120: Fatal, Command, r#"Cannot create output directory "{subject}""#;
    CMD_CREATING_LOG_FILE = 121: Info, Command, r#"Creating log file "{subject}""#;
    CMD_NUMBER_THREADS = 122: Info, Command, "Executing with {subject} threads";
    CMD_PP_CANNOT_CREATE_CACHE_DIR = 123: Fatal, Command, r#"Cannot create cache directory "{subject}""#;
    CMD_TIMESCALE_MISSING_SETTING = 124: Fatal, Command, "Missing timescale setting";
    CMD_SPLIT_FILE_MISSING_SIZE = 125: Fatal, Command, "Missing file splitting size";
    CMD_UNDEFINED_CONFIG = 126: Error, Command, r#"Undefined configuration: "{subject}""#;
    CMD_USING_GLOBAL_TIMESCALE = 127: Info, Command, r#"Using global timescale: "{subject}""#;
    CMD_CACHE_CAPACITY_EXCEEDED = 128: Warning, Command, "Cache capacity exceeded, turning off cache";
    CMD_WD_MISSING_DIR = 129: Warning, Command, r#"Working directory option "{subject}" is missing directory"#;
    CMD_CD_MISSING_DIR = 130: Warning, Command, r#"Current directory option "{subject}" is missing directory"#;
    CMD_REMAP_MISSING_DIRS = 131: Warning, Command, r#"Remapping option "{subject}" expects two absolute directory entries"#;

    // Preprocessor: 2xx
    PP_CANNOT_OPEN_FILE = 200: Error, Preprocess, r#"Cannot open file "{subject}""#;
    PP_CANNOT_OPEN_INCLUDE_FILE = 201: Error, Preprocess, r#"Cannot open include file "{subject}""#;
    PP_UNKNOWN_MACRO = 202: Error, Preprocess, r#"Unknown macro "{subject}""#;
    PP_UNDEF_UNKNOWN_MACRO = 203: Warning, Preprocess, r#"Undefining an unknown macro "{subject}""#;
    PP_OPEN_FILE_FOR_WRITE = 204: Fatal, Preprocess, r#"Cannot open file "{subject}" for write operation"#;
    PP_MULTIPLY_DEFINED_MACRO = 205: Note, Preprocess, r#"Multiply defined macro "{subject}""#, "{location}: previous definition";
    PP_SYNTAX_ERROR = 206: Error, Preprocess, "Syntax error: {subject}", "{object}";
    PP_TOO_MANY_ARGS_MACRO = 207: Error, Preprocess, r#"Too many arguments ({object}) for macro "{subject}""#, "{location}: macro definition takes {object}";
    PP_MACRO_SYNTAX_ERROR = 208: Error, Preprocess, "Syntax error in macro: {subject}", "{location}: macro instantiation";
    PP_MACRO_NO_DEFAULT_VALUE = 209: Error, Preprocess, r#"Macro instantiation omits argument {object} for "{subject}""#, "{location}: no default value for argument {object} in macro definition";
    PP_MACRO_PARENTHESIS_NEEDED = 210: Error, Preprocess, r#"Macro instantiation omits parenthesis for "{subject}""#, "{location}: macro definition has arguments";
    PP_MACRO_NAME_RESERVED = 211: Error, Preprocess, r#"Illegally redefining compiler directive "`{subject}" as a macro name"#;
    PP_MACRO_HAS_SPACE_BEFORE_ARGS = 212: Info, Preprocess, r#"Illegal space in between macro name "{subject}" and open parenthesis"#;
    PP_MACRO_UNUSED_ARGUMENT = 213: Warning, Preprocess, r#"Unused macro argument "{subject}""#;
    PP_MACRO_UNDEFINED_ARGUMENT = 214: Warning, Preprocess, r#"Undefined macro argument "{subject}""#;
    PP_RECURSIVE_MACRO_DEFINITION = 215: Error, Preprocess, r#"Recursive macro definition for "{subject}""#, r#"{location}: macro used in macro "{object}""#;
    PP_UNTERMINATED_STRING = 216: Error, Preprocess, "Illegal unterminated string: >>{subject}<<", "{location}: macro instance";
    PP_UNESCAPED_CHARACTER_IN_STRING = 217: Warning, Preprocess, "Illegal un-escaped character '{subject}' in string";
    PP_UNRECOGNIZED_ESCAPED_SEQUENCE = 218: Warning, Preprocess, "Unknown escaped sequence '{subject}'";
    PP_INVALID_INCLUDE_FILENAME = 219: Error, Preprocess, "Invalid include filename";
    PP_ILLEGAL_DIRECTIVE_IN_DESIGN_ELEMENT = 220: Error, Preprocess, r#"Illegal directive in design element "{subject}""#, "{location}: macro instance";
    PP_CANNOT_CREATE_DIRECTORY = 221: Fatal, Preprocess, r#"Cannot create directory "{subject}""#;
    PP_PROCESSING_SOURCE_FILE = 222: Info, Preprocess, r#"Preprocessing source file "{subject}""#;
    PP_PROCESSING_INCLUDE_FILE = 223: Info, Preprocess, r#"Preprocessing include file "{subject}""#;
    PP_ILLEGAL_DIRECTIVE_ELSEIF = 224: Error, Preprocess, "Illegal directive `elseif, correct directive is `elsif";
    PP_CANNOT_READ_FILE_CONTENT = 225: Error, Preprocess, r#"Cannot read the file's content "{subject}". Only UTF-8 is supported"#;
    PP_NON_ASCII_CONTENT = 226: Note, Preprocess, "Non ASCII character detected, replaced by space";
    PP_RECURSIVE_INCLUDE_DIRECTIVE = 227: Fatal, Preprocess, r#"Recursive include directive for file "{subject}""#;
    PP_ILLEGAL_TICK_LINE_VALUE = 228: Error, Preprocess, "Illegal type value for `line directive: {subject}, legal values are 0, 1, 2";

    // Parser: 3xx
    PA_CANNOT_SPLIT_FILE = 300: Warning, Parse, r#"Cannot split large file "{subject}""#;
    PA_PROCESSING_SOURCE_FILE = 301: Info, Parse, r#"Parsing source file "{subject}""#;
    PA_CANNOT_OPEN_FILE = 302: Fatal, Parse, r#"Cannot open file "{subject}""#;
    PA_UNKNOWN_MACRO = 303: Error, Parse, r#"Unknown macro "{subject}""#;
    PA_MAX_LENGTH_IDENTIFIER = 304: Error, Parse, r#"Identifier exceeds max length "{subject}""#;
    PA_NOTIMESCALE_INFO = 305: Warning, Parse, r#"No timescale set for "{subject}""#;
    PA_MISSING_TIMEUNIT = 306: Warning, Parse, r#"Missing timeunit/timeprecision for "{subject}""#;
    PA_SYNTAX_ERROR = 307: Error, Parse, "Syntax error: {subject}", "{object}";
    PA_RESERVED_KEYWORD = 308: Error, Parse, "Reserved keyword: {subject}";
    PA_UNSUPPORTED_KEYWORD_LIST = 309: Error, Parse, "Unsupported keyword set: {subject}";
    PA_UNCONNECTED_DRIVE_VALUE = 310: Error, Parse, "Illegal unconnected_drive value: {subject}";
    PA_TIMESCALE_INVALID_VALUE = 311: Error, Parse, "Invalid timescale value: {subject}, legal values: 1, 10, 100";
    PA_TIMESCALE_INVALID_SCALE = 312: Error, Parse, "Timescale precision less precise than timeunit";
    PA_INTERNAL_ERROR = 313: Error, Parse, "Internal error: {subject}";
    PA_INTERNAL_WARNING = 314: Warning, Parse, "Internal warning: {subject}";

    // Compiler: 4xx
    COMP_COMPILE = 400: Info, Compile, "Compilation..";
    COMP_COMPILE_PACKAGE = 401: Info, Compile, r#"Compile package "{subject}""#;
    COMP_COMPILE_CLASS = 402: Info, Compile, r#"Compile class "{subject}""#;
    COMP_COMPILE_MODULE = 403: Info, Compile, r#"Compile module "{subject}""#;
    COMP_COMPILE_UDP = 404: Info, Compile, r#"Compile udp "{subject}""#;
    COMP_COMPILE_PROGRAM = 405: Info, Compile, r#"Compile program "{subject}""#;
    COMP_COMPILE_CHECKER = 406: Info, Compile, r#"Compile checker "{subject}""#;
    COMP_COMPILE_INTERFACE = 407: Info, Compile, r#"Compile interface "{subject}""#;
    COMP_UNDEFINED_INTERFACE = 408: Error, Compile, r#"Undefined interface "{subject}""#;
    COMP_PORT_MISSING_TYPE = 409: Note, Compile, r#"Implicit port type (wire) for "{subject}""#, "there are {object} more instances of this message";
    COMP_PORT_MISSING_DIRECTION = 410: Warning, Compile, r#"Port "{subject}" definition missing its direction (input, output, inout)"#, "there are {object} more instances of this message";
    COMP_MODPORT_UNDEFINED_PORT = 411: Error, Compile, r#"Undefined net used in modport: "{subject}""#;
    COMP_MODPORT_UNDEFINED_CLOCKING_BLOCK = 412: Error, Compile, r#"Undefined clocking block used in modport: "{subject}""#;
    COMP_NO_MODPORT_IN_GENERATE = 413: Error, Compile, "Illegal modport in generate statement";
    COMP_PROGRAM_OBSOLETE_USAGE = 414: Warning, Compile, r#"Using programs is discouraged "{subject}", programs are obsoleted by UVM"#;
    COMP_UNDEFINED_CLASS = 415: Error, Compile, r#"Undefined class "{subject}""#;
    COMP_UNDEFINED_PACKAGE = 416: Error, Compile, r#"Undefined package "{subject}""#;
    COMP_UNDEFINED_TYPE = 417: Error, Compile, r#"Undefined type "{subject}""#;
    COMP_MULTIPLY_DEFINED_PROPERTY = 418: Warning, Compile, r#"Multiply defined property "{subject}""#, "{location}: previous definition";
    COMP_MULTIPLY_DEFINED_CLASS = 419: Warning, Compile, r#"Multiply defined class "{subject}""#, "{location}: previous definition";
    COMP_MULTIPLY_DEFINED_FUNCTION = 420: Warning, Compile, r#"Multiply defined function "{subject}""#, "{location}: previous definition";
    COMP_MULTIPLY_DEFINED_TASK = 421: Warning, Compile, r#"Multiply defined task "{subject}""#, "{location}: previous definition";
    COMP_MULTIPLY_DEFINED_CONSTRAINT = 422: Warning, Compile, r#"Multiply defined constraint "{subject}""#, "{location}: previous definition";
    COMP_MULTIPLY_DEFINED_TYPEDEF = 423: Warning, Compile, r#"Multiply defined typedef "{subject}""#, "{location}: previous definition";
    COMP_MULTIPLY_DEFINED_INNER_CLASS = 424: Warning, Compile, r#"Multiply defined inner class "{subject}""#, "{location}: previous definition";
    COMP_MULTIPLY_DEFINED_COVERGROUP = 425: Warning, Compile, r#"Multiply defined covergroup "{subject}""#, "{location}: previous definition";
    COMP_MULTIPLY_DEFINED_PARAMETER = 426: Warning, Compile, r#"Multiply defined parameter "{subject}""#, "{location}: previous definition";
    COMP_UNDEFINED_VARIABLE = 427: Error, Compile, r#"Undefined variable "{subject}""#;
    COMP_UNDEFINED_BASE_CLASS = 428: Error, Compile, r#"Undefined base class "{subject}" extended by "{object}""#;
    COMP_MULTIPLY_DEFINED_PACKAGE = 429: Warning, Compile, r#"Multiply defined package: "{subject}""#, "{location}: previous definition";
    COMP_INCOMPATIBLE_TYPES = 430: Error, Compile, r#"Incompatible types: "{subject}" is assigned "{object}""#;
    COMP_MULTIPLY_DEFINED_VARIABLE = 431: Warning, Compile, r#"Multiply defined variable "{subject}""#, "{location}: previous definition";
    COMP_NO_METHOD_FOR_TYPE = 432: Error, Compile, r#"Function "{object}" is not defined for variable {subject}"#, "{location}: type definition";
    COMP_UNDEFINED_SYSTEM_FUNCTION = 433: Error, Compile, r#"Undefined system task/function "${subject}""#;
    COMP_UNDEFINED_USER_FUNCTION = 434: Error, Compile, r#"Undefined user task/function "{subject}""#;
    COMP_MULTIPLY_DEFINED_DESIGN_UNIT = 435: Warning, Compile, r#"Colliding compilation unit name: "{subject}""#, "{location}: previous usage";
    COMP_COMPILE_GENERATE_BLOCK = 436: Info, Compile, r#"Compile generate block "{subject}""#;
    COMP_INTERNAL_ERROR_OUT_OF_BOUND = 437: Error, Compile, "Internal out of bound error";
    COMP_CANNOT_REDEFINE_BUILTIN_METHOD = 438: Error, Compile, "Cannot override builtin method: {subject}";
    COMP_ILLEGAL_TIMESCALE = 439: Error, Compile, "Illegal timescale: {subject}";
    COMP_UNSPECIFIED_PORT = 440: Error, Compile, r#"Port "{subject}" of unspecified type"#;
    COMP_UNMATCHED_LABEL = 441: Error, Compile, r#"Unmatched label "{subject}""#, r#"{location}: closing label "{object}""#;
    COMP_SKIPPING_BLACKBOX_MODULE = 442: Info, Compile, r#"Skipping blackboxed module "{subject}""#;
    COMP_SKIPPING_BLACKBOX_INSTANCE = 443: Info, Compile, r#"Skipping blackboxed instance "{subject}""#;
    COMP_ILLEGAL_DEFAULT_PORT_VALUE = 444: Error, Compile, r#"Illegal default value for port "{subject}""#;
    COMP_UNPACKED_IN_PACKED = 445: Error, Compile, r#"Illegal unpacked member in packed struct "{subject}""#;

    // Python extension: 5xx
    PY_PROCESSING_SOURCE_FILE = 500: Info, PythonExt, r#"Processing source file "{subject}""#;
    PY_NO_PYTHON_LISTENER_FOUND = 501: Fatal, PythonExt, "No Python listener found";

    // Elaborator: 6xx
    ELAB_NO_MODULE_DEFINITION = 600: Warning, Elaborate, r#"Cannot find a module definition for "{subject}""#;
    ELAB_NO_UDP_DEFINITION = 601: Warning, Elaborate, r#"Cannot find a udp definition for "{subject}""#;
    ELAB_NO_INTERFACE_DEFINITION = 602: Warning, Elaborate, r#"Cannot find an interface definition for "{subject}""#;
    ELAB_TOP_LEVEL_MODULE = 603: Note, Elaborate, r#"Top level module "{subject}""#;
    ELAB_TOP_LEVEL_DOES_NOT_EXIST = 604: Fatal, Elaborate, r#"Command line top level module does not exist "{subject}""#;
    ELAB_TOP_LEVEL_IS_NOT_A_TOP_LEVEL = 605: Warning, Elaborate, r#"Command line top level is not a top level "{subject}""#;
    ELAB_MULTIPLE_TOP_LEVEL_MODULES = 606: Note, Elaborate, "Multiple top level modules in design";
    ELAB_MULTIPLY_DEFINED_MODULE = 607: Warning, Elaborate, r#"Multiply defined module "{subject}""#, "{location}: previous definition";
    ELAB_NO_TOP_LEVEL_MODULE = 608: Warning, Elaborate, "No top level module in design";
    ELAB_INSTANTIATION_LOOP = 609: Error, Elaborate, r#"Instantiation loop for "{subject}""#, "{location}: previous instantiation";
    ELAB_NB_TOP_LEVEL_MODULES = 610: Note, Elaborate, "Nb top level modules: {subject}";
    ELAB_MAX_INSTANCE_DEPTH = 611: Note, Elaborate, "Max instance depth: {subject}";
    ELAB_NB_INSTANCES = 612: Note, Elaborate, "Nb instances: {subject}";
    ELAB_NB_LEAF_INSTANCES = 613: Note, Elaborate, "Nb leaf instances: {subject}";
    ELAB_NB_UNDEF_MODULES = 614: Warning, Elaborate, "Nb undefined modules: {subject}";
    ELAB_NB_UNDEF_INSTANCES = 615: Warning, Elaborate, "Nb undefined instances: {subject}";
    ELAB_UNDEF_VARIABLE = 616: Error, Elaborate, "Undefined variable: {subject}";
    ELAB_UNMATCHED_DEFPARAM = 617: Warning, Elaborate, r#"Defparam does not match any design object: "{subject}""#;
    ELAB_DEFPARAM_OUTSIDE_SCOPE = 618: Error, Elaborate, r#"Defparam sets an object outside its generate scope: "{subject}""#;
    ELAB_MULTI_DEFPARAM_ON_OBJECT = 619: Warning, Elaborate, r#"Multiple defparam on object: "{subject}""#, "{location}: previous setting";
    ELAB_UNDEFINED_CONFIG = 620: Error, Elaborate, r#"Undefined configuration: "{subject}""#;
    ELAB_CONFIGURATION_USED = 621: Note, Elaborate, r#"Using configuration "{subject}""#;
    ELAB_CONFIGURATION_IGNORED = 622: Note, Elaborate, r#"Ignoring configuration "{subject}""#;
    ELAB_USE_CLAUSE_IGNORED = 623: Warning, Elaborate, r#"Use clause has no effect, no matching design object found "{subject}""#;
    ELAB_SCOPE_PATH = 624: Note, Elaborate, r#"Scope "{subject}""#;
    ELAB_INSTANCE_PATH = 625: Note, Elaborate, r#"Instance "{subject}""#;
    ELAB_INTERFACE_INSTANCE_PATH = 626: Note, Elaborate, r#"Interface instance "{subject}""#;
    ELAB_PROGRAM_INSTANCE_PATH = 627: Note, Elaborate, r#"Program instance "{subject}""#;
    ELAB_ELABORATING_DESIGN = 628: Info, Elaborate, "Design elaboration..";
    ELAB_ELABORATING_TESTBENCH = 629: Info, Elaborate, "Testbench elaboration..";
    ELAB_UNDEFINED_PACKAGE = 630: Error, Elaborate, r#"Undefined imported package: "{subject}""#;
    ELAB_OUT_OF_RANGE_PARAM_INDEX = 631: Error, Elaborate, r#"Out of range parameter index: "{subject}""#;
    ELAB_NEGATIVE_VALUE = 632: Note, Elaborate, "Negative value in instance {subject}";
    ELAB_DIVIDE_BY_ZERO = 633: Error, Elaborate, r#"Division by zero in instance "{subject}""#;
    ELAB_ILLEGAL_IMPLICIT_NET = 634: Error, Elaborate, r#"Illegal implicit net "{subject}""#;
    ELAB_ILLEGAL_ZERO_VALUE = 635: Error, Elaborate, "Illegal zero or negative size {subject}";
    ELAB_EMPTY_PARAM_OVERRIDE = 636: Note, Elaborate, "Empty parameter override for {subject}";
    ELAB_USE_INTERFACE_AS_SIGNAL_TYPE = 637: Error, Elaborate, r#"Illegal use of an interface as a signal type for "{subject}""#;
    ELAB_UNKNOWN_STRUCT_MEMBER = 638: Error, Elaborate, r#"Unknown struct member "{subject}""#, r#"{location}: struct definition for "{object}""#;
    ELAB_UNKNOWN_INTERFACE_MEMBER = 639: Error, Elaborate, r#"Unknown interface member "{subject}""#, r#"{location}: interface definition for "{object}""#;
    ELAB_UNKNOWN_PARAMETER_OVERRIDE = 640: Error, Elaborate, r#"Unknown parameter override "{subject}""#;
    ELAB_UNKNOWN_PARAMETER_COMMAND = 641: Error, Elaborate, r#"Unknown parameter in command line override "{subject}""#;
    ELAB_EXPRESSION_LOOP = 642: Error, Elaborate, r#"Expression loop in instance "{subject}""#;
    ELAB_SKIPPING_BLACKBOX_MODULE = 643: Info, Elaborate, r#"Skipping blackboxed module "{subject}""#;
    ELAB_SKIPPING_BLACKBOX_INSTANCE = 644: Info, Elaborate, r#"Skipping blackboxed instance "{subject}""#;
    ELAB_INVALID_CASE_STMT_VALUE = 645: Error, Elaborate, "Invalid generate case stmt value";
    ELAB_UNKNOWN_PORT = 646: Error, Elaborate, r#"Unknown port "{subject}""#;
    ELAB_TOP_PARAMETER_NO_DEFAULT = 647: Error, Elaborate, r#"Top-level parameter with no default value "{subject}""#;
    ELAB_SYSTEM_FATAL = 648: Fatal, Elaborate, "Fatal elaboration {subject}";
    ELAB_SYSTEM_ERROR = 649: Error, Elaborate, "Elaboration error {subject}";
    ELAB_SYSTEM_WARNING = 650: Warning, Elaborate, "Elaboration warning {subject}";
    ELAB_SYSTEM_INFO = 651: Info, Elaborate, "Elaboration info {subject}";

    // Library mapping: 7xx
    LIB_FILE_MAPS_TO_MULTIPLE_LIBS = 700: Error, Library, r#"File "{object}" maps to multiple libraries: "{subject}""#;

    // Model construction: 8xx
    MODEL_UNSUPPORTED_EXPR = 800: Error, Model, r#"Unsupported expression "{subject}""#;
    MODEL_UNSUPPORTED_STMT = 801: Error, Model, r#"Unsupported statement "{subject}""#;
    MODEL_UNSUPPORTED_SIGNAL = 802: Error, Model, r#"Unsupported signal type "{subject}""#;
    MODEL_WRONG_OBJECT_TYPE = 803: Error, Model, "{subject}";
    MODEL_WRONG_COVERAGE_LINE = 804: Error, Model, "Model coverage pointing to empty source line";
    MODEL_UNSUPPORTED_TYPE = 805: Error, Model, r#"Unsupported data type "{subject}""#;
    MODEL_CREATING_MODEL = 806: Info, Model, "Creating model..";
    MODEL_ELABORATION = 807: Info, Model, "Elaborating model..";
    MODEL_WRITE_DB = 808: Info, Model, "Writing model database: {subject} ..";
    MODEL_WRITE_HTML_COVERAGE = 809: Info, Model, "Writing model HTML coverage: {subject} ..";
    MODEL_LOAD_DB = 810: Info, Model, "Loading model database: {subject} ..";
    MODEL_VISITOR = 811: Info, Model, "Decompiling model..";
    MODEL_UNDEFINED_PATTERN_KEY = 812: Error, Model, r#"Undefined pattern key "{subject}""#;
    MODEL_UNMATCHED_FIELD_IN_PATTERN_ASSIGN = 813: Error, Model, r#"Unmatched member during pattern assignment "{subject}""#;
    MODEL_REAL_TYPE_AS_SELECT = 814: Error, Model, r#"Can't use a real type as bit select "{subject}""#;
    MODEL_RETURN_VALUE_VOID_FUNCTION = 815: Error, Model, r#"Void function "{subject}" returns a value"#;
    MODEL_ILLEGAL_DEFAULT_VALUE = 816: Error, Model, "Illegal default value";
    MODEL_MULTIPLE_CONT_ASSIGN = 817: Error, Model, "Multiple continuous assignments to: {subject}", "{location}: other assignment";
    MODEL_ILLEGAL_WIRE_LHS = 818: Error, Model, r#"Illegal lhs of type wire "{subject}""#;
    MODEL_ILLEGAL_PACKED_DIMENSION = 819: Error, Model, r#"Illegal dynamic packed dimension "{subject}""#;
    MODEL_NON_SYNTHESIZABLE = 820: Warning, Model, r#"Non-synthesizable construct "{subject}""#;
    MODEL_ENUM_CONST_SIZE_MISMATCH = 821: Error, Model, r#"Enum const size does not match base type size "{subject}""#, "{location}: base type";
    MODEL_DIVIDE_BY_ZERO = 822: Error, Model, r#"Division by zero in instance "{subject}""#;
    MODEL_INTERNAL_ERROR_OUT_OF_BOUND = 823: Error, Model, "Internal out of bound error";
    MODEL_UNDEFINED_USER_FUNCTION = 824: Error, Model, r#"Undefined user task/function "{subject}""#;
    MODEL_UNRESOLVED_HIER_PATH = 825: Error, Model, r#"Unresolved hierarchical reference "{subject}""#;
    MODEL_UNDEFINED_VARIABLE = 826: Error, Model, r#"Undefined variable "{subject}""#;
    MODEL_INVALID_CASE_STMT_VALUE = 827: Error, Model, "Invalid case stmt value";
    MODEL_UNSUPPORTED_TYPESPEC = 828: Error, Model, r#"Unsupported typespec "{subject}""#;
    MODEL_UNRESOLVED_PROPERTY = 829: Error, Model, r#"Unresolved property "{subject}""#;
    MODEL_NON_TEMPORAL_SEQUENCE_USE = 830: Error, Model, r#"Sequence used in non-temporal context "{subject}""#;
    MODEL_NON_POSITIVE_VALUE = 831: Error, Model, r#"Required positive value (>=1), "{subject}" given"#;
    MODEL_SIGNED_UNSIGNED_PORT_CONN = 832: Warning, Model, r#"Critical: Signed vs Unsigned port connection "{subject}""#;
    MODEL_FORCING_UNSIGNED_TYPE = 833: Warning, Model, r#"Critical: Forcing signal to unsigned type due to unsigned port binding "{subject}""#;
}
