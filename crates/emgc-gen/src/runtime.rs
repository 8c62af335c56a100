//! Fixed text of the emitted C++ simulator.
//!
//! The generated program's CLI is `PROG INPUT MODEL STEPS OUTPUT`: it reads
//! a rectangular ASCII grid from INPUT into `prev`, dispatches on MODEL by
//! name, steps the automaton STEPS times, and writes the final grid to
//! OUTPUT.

/// Headers, simulation globals, and the coordinate helpers every generated
/// fragment leans on. `coordinate1d`/`coordinate2d` wrap offsets into the
/// grid; `vec1d`/`vec2d` are identity wrappers so literal coordinate sets
/// can be built in-line in either dimensionality.
pub(crate) const PREAMBLE: &str = r#"#include <iostream>
#include <string.h>
#include <string>
#include <system_error>
#include <vector>
#include <algorithm>
#include <memory>
#include <utility>
int steps = 0;
std::string name;
std::vector<char> prev;
int width = 0;
int height = 0;
int coordinate1d(int x) {
    return x % width;
}
std::vector<int> vec1d(std::vector<int> l) { return l; };
std::vector<std::pair<int,int>> vec2d(std::vector<std::pair<int,int>> l) { return l; };
int coordinate2d(std::pair<int,int> p) {
    return (p.first % height) + (width * (p.second % height));
};
std::pair<int,int> add_point(std::pair<int,int> l, int x, int y) {
    return std::pair<int,int>{l.first + x, l.second + y};
};
"#;

/// Start of the emitted `main`: argument validation, then the grid reader.
///
/// A line break only ends a row when the row is non-empty, so `\r\n` input
/// does not produce phantom rows, and a final row without a trailing
/// newline still counts towards `height`.
pub(crate) const MAIN_PRELUDE: &str = r#"int main(int argc, char **argv) {
    name = std::string(argv[0]);
    if(argc != 5) {
        std::cout << "Error: Missing operands\nUsage: ./" + name + " INPUT MODEL STEPS OUTPUT\n";
        return 1;
    }
    steps = std::atoi(argv[3]);
    if(steps <= 0) {
        std::cout << "Error: Incorrect 3rd operand STEPS must be > 0\n";
        return 1;
    }
    FILE *input = fopen(argv[1], "r");
    if(input == NULL) {
        perror("Error: Unable to open input file.\n");
        return 1;
    }
    int pos = 0;
    int c;
    while((c = getc(input)) != EOF) {
        if(c == '\n' || c == '\r') {
            if(pos > 0) {
                height++;
            }
            pos = 0;
        } else {
            prev.push_back(c);
            pos++;
            if(height == 0) {
                width = pos;
            } else if(pos > width) {
                std::cout << "Error: Contradicting dimensions within INPUT file.\n";
                return 1;
            }
        }
    }
    if(pos > 0) {
        height++;
    }
    std::string model(argv[2]);
    std::string error;
    "#;

/// End of the emitted `main`: the final else-branch of the dispatch chain,
/// then the grid writer.
pub(crate) const MAIN_POSTLUDE: &str = r#"{
        std::cout << "Error: Incorrect 2nd operand MODEL must be a name of a model\n";
        return 1;
    }
    fclose(input);
    FILE *output = fopen(argv[4], "w");
    if(output == NULL) {
        perror("Error: Unable to create output file.\n");
        return 1;
    }
    pos = 0;
    while(pos < (int) prev.size()) {
        putc(prev.at(pos), output);
        pos++;
        if(pos % width == 0) {
            putc('\n', output);
        }
    }
    fclose(output);
    return 0;
}
"#;

/// One name-based dispatch case, chained into the next via `else`.
pub(crate) fn dispatch_case(id: &str) -> String {
    format!(
        "if(model == \"{id}\") {{\n        \
             if((error = {id}()) != \"\") {{\n            \
                 std::cout << error + \"\\n\";\n            \
                 return 1;\n        \
             }}\n    \
         }} else "
    )
}

/// Opening of a model function over a single-row grid. Guarded so a 1-D
/// model rejects multi-row input.
pub(crate) fn model_header_1d(id: &str) -> String {
    format!(
        "const char* {id}() {{\n    \
             if(height > 1) {{\n        \
                 return \"Error: Expected 1 Dimension for INPUT.\";\n    \
             }}\n    \
             std::vector<char> next(width);\n    \
             for(int t = 0; t < steps; t++) {{\n        \
                 for(int x = 0; x < width; x++) {{\n            \
                     int current = x;\n            "
    )
}

/// Closing of a 1-D model function.
pub(crate) const MODEL_FOOTER_1D: &str = "        }\n        \
         std::copy(next.begin(), next.end(), prev.begin());\n    \
     }\n    \
     return \"\";\n\
 }\n";

/// Opening of a model function over a rectangular grid: `t`, `y`, `x`
/// loops, with the subject cell's index precomputed.
pub(crate) fn model_header_2d(id: &str) -> String {
    format!(
        "const char* {id}() {{\n    \
             std::vector<char> next(width * height);\n    \
             for(int t = 0; t < steps; t++) {{\n        \
                 for(int y = 0; y < height; y++) {{\n        \
                 for(int x = 0; x < width; x++) {{\n            \
                     int current = coordinate2d({{x,y}});\n            "
    )
}

/// Closing of a 2-D model function.
pub(crate) const MODEL_FOOTER_2D: &str = "        }\n        }\n        \
         std::copy(next.begin(), next.end(), prev.begin());\n    \
     }\n    \
     return \"\";\n\
 }\n";
