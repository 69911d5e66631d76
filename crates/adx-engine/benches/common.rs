// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_block_source(classes: usize, methods: usize) -> String {
    let mut content = String::new();

    for class in 0..classes {
        content.push_str(&format!(
            "/**\n * Class: geo::Shape{class}\n * Shape number {class}.\n *\n * @property size The size.\n * @constructor Build a shape.\n */\nclass Shape{class} {{\n"
        ));
        for method in 0..methods {
            content.push_str(&format!(
                "    /**\n     * Method: method{method}\n     * Does thing {method}.\n     *\n     * @param arg The argument.\n     * @return The result.\n     */\n    fun method{method}(arg: Int): Int {{ return arg }}\n\n"
            ));
        }
        content.push_str("}\n\n");
    }

    content
}

#[allow(dead_code)]
pub fn generate_line_source(classes: usize, methods: usize) -> String {
    let mut content = String::new();

    for class in 0..classes {
        content.push_str(&format!("// Class: Shape{class}\n// Shape number {class}.\nclass Shape{class} {{\n"));
        for method in 0..methods {
            content.push_str(&format!(
                "    // Method: method{method}\n    // Does thing {method}.\n    //\n    // @param arg The argument.\n    // @return The result.\n    int method{method}(int arg);\n"
            ));
        }
        content.push_str("};\n");
    }

    content
}
