//! Extension-based classification of sampled paths

use std::collections::{BTreeSet, HashMap};

/// Multi-part suffixes that identify a technology better than their last part
const COMPOUND_EXTENSIONS: &[&str] = &[
    "blade.php",
    "d.ts",
    "d.mts",
    "d.cts",
    "html.erb",
    "html.haml",
    "html.slim",
    "html.twig",
    "html.eex",
    "html.heex",
    "cshtml",
    "module.css",
    "module.scss",
];

/// Test-marker infixes removed before generic extraction
const TEST_MARKERS: &[&str] = &[".test.", ".spec.", ".e2e.", ".stories."];

/// Extension → technology identifiers
static EXTENSION_TECHNOLOGIES: &[(&str, &[&str])] = &[
    ("js", &["javascript"]),
    ("mjs", &["javascript"]),
    ("cjs", &["javascript"]),
    ("jsx", &["javascript", "react"]),
    ("ts", &["typescript"]),
    ("mts", &["typescript"]),
    ("cts", &["typescript"]),
    ("d.ts", &["typescript"]),
    ("d.mts", &["typescript"]),
    ("d.cts", &["typescript"]),
    ("tsx", &["typescript", "react"]),
    ("vue", &["vue"]),
    ("svelte", &["svelte"]),
    ("astro", &["astro"]),
    ("html", &["html"]),
    ("htm", &["html"]),
    ("css", &["css"]),
    ("module.css", &["css", "css-modules"]),
    ("module.scss", &["sass", "css-modules"]),
    ("scss", &["sass"]),
    ("sass", &["sass"]),
    ("less", &["less"]),
    ("styl", &["stylus"]),
    ("py", &["python"]),
    ("pyi", &["python"]),
    ("ipynb", &["jupyter", "python"]),
    ("rb", &["ruby"]),
    ("erb", &["ruby"]),
    ("html.erb", &["ruby", "rails"]),
    ("html.haml", &["ruby", "haml"]),
    ("haml", &["haml"]),
    ("html.slim", &["ruby", "slim"]),
    ("php", &["php"]),
    ("blade.php", &["php", "laravel"]),
    ("twig", &["twig"]),
    ("html.twig", &["twig", "symfony"]),
    ("java", &["java"]),
    ("kt", &["kotlin"]),
    ("kts", &["kotlin"]),
    ("scala", &["scala"]),
    ("sc", &["scala"]),
    ("groovy", &["groovy"]),
    ("gradle", &["gradle"]),
    ("clj", &["clojure"]),
    ("cljs", &["clojurescript"]),
    ("cljc", &["clojure"]),
    ("go", &["go"]),
    ("rs", &["rust"]),
    ("c", &["c"]),
    ("h", &["c"]),
    ("cc", &["cpp"]),
    ("cpp", &["cpp"]),
    ("cxx", &["cpp"]),
    ("hpp", &["cpp"]),
    ("hh", &["cpp"]),
    ("hxx", &["cpp"]),
    ("m", &["objective-c"]),
    ("mm", &["objective-c"]),
    ("swift", &["swift"]),
    ("cs", &["csharp"]),
    ("cshtml", &["csharp", "razor"]),
    ("razor", &["csharp", "razor"]),
    ("fs", &["fsharp"]),
    ("fsx", &["fsharp"]),
    ("vb", &["visual-basic"]),
    ("dart", &["dart"]),
    ("ex", &["elixir"]),
    ("exs", &["elixir"]),
    ("html.eex", &["elixir", "phoenix"]),
    ("html.heex", &["elixir", "phoenix"]),
    ("heex", &["elixir", "phoenix"]),
    ("erl", &["erlang"]),
    ("hrl", &["erlang"]),
    ("gleam", &["gleam"]),
    ("hs", &["haskell"]),
    ("lhs", &["haskell"]),
    ("ml", &["ocaml"]),
    ("mli", &["ocaml"]),
    ("elm", &["elm"]),
    ("purs", &["purescript"]),
    ("re", &["reason"]),
    ("res", &["rescript"]),
    ("lua", &["lua"]),
    ("r", &["r"]),
    ("rmd", &["r"]),
    ("jl", &["julia"]),
    ("pl", &["perl"]),
    ("pm", &["perl"]),
    ("sh", &["shell"]),
    ("bash", &["shell"]),
    ("zsh", &["shell"]),
    ("fish", &["shell"]),
    ("ps1", &["powershell"]),
    ("psm1", &["powershell"]),
    ("bat", &["batch"]),
    ("cmd", &["batch"]),
    ("sql", &["sql"]),
    ("prisma", &["prisma"]),
    ("graphql", &["graphql"]),
    ("gql", &["graphql"]),
    ("proto", &["protobuf"]),
    ("thrift", &["thrift"]),
    ("sol", &["solidity"]),
    ("move", &["move"]),
    ("cairo", &["cairo"]),
    ("vy", &["vyper"]),
    ("zig", &["zig"]),
    ("nim", &["nim"]),
    ("v", &["v"]),
    ("cr", &["crystal"]),
    ("d", &["d"]),
    ("f90", &["fortran"]),
    ("f95", &["fortran"]),
    ("for", &["fortran"]),
    ("cob", &["cobol"]),
    ("pas", &["pascal"]),
    ("adb", &["ada"]),
    ("asm", &["assembly"]),
    ("s", &["assembly"]),
    ("wat", &["webassembly"]),
    ("cu", &["cuda"]),
    ("glsl", &["glsl"]),
    ("hlsl", &["hlsl"]),
    ("wgsl", &["wgsl"]),
    ("tf", &["terraform"]),
    ("tfvars", &["terraform"]),
    ("hcl", &["hcl"]),
    ("bicep", &["bicep"]),
    ("nix", &["nix"]),
    ("dockerfile", &["docker"]),
    ("mdx", &["mdx"]),
    ("tex", &["latex"]),
    ("gd", &["godot"]),
    ("tscn", &["godot"]),
    ("unity", &["unity"]),
    ("uproject", &["unreal-engine"]),
    ("xaml", &["xaml"]),
    ("qml", &["qt"]),
    ("ui", &["qt"]),
    ("hbs", &["handlebars"]),
    ("handlebars", &["handlebars"]),
    ("mustache", &["mustache"]),
    ("pug", &["pug"]),
    ("ejs", &["ejs"]),
    ("njk", &["nunjucks"]),
    ("liquid", &["liquid"]),
    ("jinja", &["jinja"]),
    ("j2", &["jinja"]),
    ("coffee", &["coffeescript"]),
    ("ls", &["livescript"]),
    ("hx", &["haxe"]),
    ("rkt", &["racket"]),
    ("scm", &["scheme"]),
    ("lisp", &["common-lisp"]),
    ("el", &["emacs-lisp"]),
    ("vim", &["vim-script"]),
    ("tcl", &["tcl"]),
    ("awk", &["awk"]),
    ("apex", &["apex"]),
    ("cls", &["apex"]),
    ("abap", &["abap"]),
    ("mojo", &["mojo"]),
];

/// Counts of each normalized extension
pub type ExtensionHistogram = HashMap<String, usize>;

/// Normalized extension of a path: compound suffixes win, test markers are
/// stripped, otherwise the lower-cased text after the last dot.
pub fn extension_of(path: &str) -> Option<String> {
    let name = path.rsplit('/').next().unwrap_or(path).to_lowercase();

    if name == "dockerfile" || name.starts_with("dockerfile.") {
        return Some("dockerfile".to_string());
    }

    for compound in COMPOUND_EXTENSIONS {
        if let Some(stem) = name.strip_suffix(compound) {
            if stem.ends_with('.') && stem.len() > 1 {
                return Some(compound.to_string());
            }
        }
    }

    let mut name = name;
    for marker in TEST_MARKERS {
        if let Some(idx) = name.find(marker) {
            name = format!("{}.{}", &name[..idx], &name[idx + marker.len()..]);
        }
    }

    let idx = name.rfind('.')?;
    if idx == 0 || idx + 1 == name.len() {
        return None;
    }
    Some(name[idx + 1..].to_string())
}

/// Technologies mapped from one normalized extension
pub fn technologies_for_extension(ext: &str) -> &'static [&'static str] {
    EXTENSION_TECHNOLOGIES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, techs)| *techs)
        .unwrap_or(&[])
}

pub fn extension_histogram(paths: &[String]) -> ExtensionHistogram {
    let mut histogram = ExtensionHistogram::new();
    for path in paths {
        if let Some(ext) = extension_of(path) {
            *histogram.entry(ext).or_insert(0) += 1;
        }
    }
    histogram
}

/// The `limit` most frequent extensions, descending by count then by name
pub fn top_extensions(histogram: &ExtensionHistogram, limit: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(String, usize)> = histogram
        .iter()
        .map(|(ext, count)| (ext.clone(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(limit);
    entries
}

/// Union of technologies contributed by every extension present in `paths`
pub fn classify_by_extension(paths: &[String]) -> BTreeSet<String> {
    classify_histogram(&extension_histogram(paths))
}

pub fn classify_histogram(histogram: &ExtensionHistogram) -> BTreeSet<String> {
    histogram
        .iter()
        .filter(|(_, count)| **count >= 1)
        .flat_map(|(ext, _)| technologies_for_extension(ext).iter())
        .map(|tech| tech.to_string())
        .collect()
}
