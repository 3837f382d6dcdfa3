use opal_lang_ast::{ClassDecl, FunctionDecl, HasLine, HasSpan, Program, VarDecl};
use opal_lang_miette_util::ToMiette;

use crate::insensitive_map::InsensitiveMap;
use crate::report::Reporter;
use crate::{BuildFailure, DeclarationError};

use super::{ClassSymbolTable, FunctionSymbolTable, FunctionVariable, SymbolTable, VariableKind};

/// Build the symbol table of a program in a single pass.
///
/// Every conflict is reported to `reporter` as soon as it is found and the walk
/// continues, so one run reports all of them. The first declaration of a name
/// is kept; later ones are reported against it and skipped.
///
/// A redeclared class is dropped together with all of its members, which does
/// not fail the build by itself. A redeclared method, or a name declared twice
/// inside one method, fails the build: the table is discarded and the
/// collected errors are returned instead.
pub fn build_symbol_table<'a>(
    program: &'a Program,
    reporter: &mut dyn Reporter,
) -> Result<SymbolTable<'a>, BuildFailure> {
    let mut ctx = Ctx::new(reporter);
    let mut symbol_table = SymbolTable::default();

    let Program { name, classes } = program;
    log::debug!("Building symbol table for program {name}");

    for class in classes {
        class.build(&mut symbol_table, &mut ctx);
    }

    ctx.finish(symbol_table)
}

struct Ctx<'r> {
    reporter: &'r mut dyn Reporter,
    errors: Vec<DeclarationError>,
    failed: bool,
}

impl<'r> Ctx<'r> {
    fn new(reporter: &'r mut dyn Reporter) -> Self {
        Ctx { reporter, errors: Vec::new(), failed: false }
    }

    fn emit(&mut self, err: DeclarationError) {
        log::debug!("Declaration conflict: {err}");
        self.reporter.report(err.line(), &err.to_string());
        self.failed |= err.fails_build();
        self.errors.push(err);
    }

    fn finish<'a>(self, symbol_table: SymbolTable<'a>) -> Result<SymbolTable<'a>, BuildFailure> {
        if self.failed {
            Err(BuildFailure { errors: self.errors })
        } else {
            Ok(symbol_table)
        }
    }
}

trait BuildSymbolTable<'a> {
    type Scope;

    fn build(&'a self, scope: &mut Self::Scope, ctx: &mut Ctx<'_>);
}

impl<'a> BuildSymbolTable<'a> for ClassDecl {
    type Scope = SymbolTable<'a>;

    fn build(&'a self, symbol_table: &mut SymbolTable<'a>, ctx: &mut Ctx<'_>) {
        let ClassDecl { name, block, .. } = self;

        let class_table =
            match symbol_table.classes.insert_if_absent(&name.id, ClassSymbolTable::new(self)) {
                Ok(class_table) => class_table,
                Err(first) => {
                    ctx.emit(DeclarationError::DuplicateClass {
                        name: first.decl.name.id.clone(),
                        first_line: first.decl.line(),
                        line: self.line(),
                        span: self.span().to_miette(),
                    });
                    return;
                }
            };
        log::debug!("Registered class {name}");

        for field in &block.fields {
            declare_fields(&mut class_table.fields, field);
        }
        for method in &block.methods {
            method.build(class_table, ctx);
        }
    }
}

impl<'a> BuildSymbolTable<'a> for FunctionDecl {
    type Scope = ClassSymbolTable<'a>;

    fn build(&'a self, class_table: &mut ClassSymbolTable<'a>, ctx: &mut Ctx<'_>) {
        let FunctionDecl { name, params, return_type, block } = self;

        let function_table =
            match class_table.methods.insert_if_absent(&name.id, FunctionSymbolTable::new(self)) {
                Ok(function_table) => function_table,
                Err(first) => {
                    ctx.emit(DeclarationError::DuplicateFunction {
                        name: name.id.clone(),
                        first_line: first.decl.line(),
                        line: self.line(),
                        span: self.span().to_miette(),
                    });
                    return;
                }
            };
        log::debug!("Registered method {name}");

        // The method's own name stands for its result and cannot be reused.
        function_table.variables.put(
            &name.id,
            FunctionVariable { name, typ: return_type, line: name.line, kind: VariableKind::Result },
        );

        for param in params {
            declare_variables(&mut function_table.variables, param, VariableKind::Parameter, ctx);
        }
        for local in &block.locals {
            declare_variables(&mut function_table.variables, local, VariableKind::Local, ctx);
        }
    }
}

/// Fields are not checked for conflicts here; a repeated field name keeps its
/// first declaration.
fn declare_fields<'a>(fields: &mut InsensitiveMap<&'a VarDecl>, decl: &'a VarDecl) {
    for name in &decl.names {
        match fields.insert_if_absent(&name.id, decl) {
            Ok(_) => log::trace!("Declared field {name}: {}", decl.typ),
            Err(_) => log::trace!("Field {name} on line {} is already declared", name.line),
        }
    }
}

fn declare_variables<'a>(
    variables: &mut InsensitiveMap<FunctionVariable<'a>>,
    decl: &'a VarDecl,
    kind: VariableKind,
    ctx: &mut Ctx<'_>,
) {
    let VarDecl { names, typ } = decl;

    for name in names {
        let variable = FunctionVariable { name, typ, line: name.line, kind };
        match variables.insert_if_absent(&name.id, variable) {
            Ok(_) => log::trace!("Declared {kind} {name}: {typ}"),
            Err(first) => ctx.emit(DeclarationError::DuplicateVariable {
                name: name.id.clone(),
                first_line: first.line,
                line: name.line,
                span: name.span().to_miette(),
            }),
        }
    }
}

#[cfg(test)]
mod build_tests {
    use opal_lang_ast::{ClassBlock, FunctionBlock, Ident, TypeDenoter};
    use codespan::Span;

    use super::*;

    fn var(names: &[(&str, usize)], typ: TypeDenoter) -> VarDecl {
        VarDecl { names: names.iter().map(|(id, line)| Ident::new(id, *line)).collect(), typ }
    }

    fn method(
        name: &str,
        line: usize,
        return_type: TypeDenoter,
        params: Vec<VarDecl>,
        locals: Vec<VarDecl>,
    ) -> FunctionDecl {
        FunctionDecl {
            name: Ident::new(name, line),
            params,
            return_type,
            block: FunctionBlock { locals, body: vec![] },
        }
    }

    fn class(name: &str, line: usize, fields: Vec<VarDecl>, methods: Vec<FunctionDecl>) -> ClassDecl {
        ClassDecl { name: Ident::new(name, line), parent: None, block: ClassBlock { fields, methods } }
    }

    fn program(classes: Vec<ClassDecl>) -> Program {
        Program { name: Ident::new("Test", 1), classes }
    }

    fn build(program: &Program) -> (Result<SymbolTable<'_>, BuildFailure>, Vec<String>) {
        let mut diagnostics: Vec<String> = Vec::new();
        let result = build_symbol_table(program, &mut diagnostics);
        (result, diagnostics)
    }

    fn animal(line: usize) -> ClassDecl {
        class(
            "Animal",
            line,
            vec![var(&[("name", line + 1)], TypeDenoter::Char)],
            vec![method(
                "speak",
                line + 2,
                TypeDenoter::Char,
                vec![],
                vec![var(&[("sound", line + 3)], TypeDenoter::Char)],
            )],
        )
    }

    #[test]
    fn empty_program() {
        let prg = program(vec![]);
        let (result, diagnostics) = build(&prg);
        assert!(result.unwrap().classes.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn duplicate_class_case_variant() {
        let mut second = animal(10);
        second.name = Ident::new("animal", 10);
        second.block.fields.push(var(&[("legs", 11)], TypeDenoter::Integer));
        let prg = program(vec![animal(1), second]);

        let (result, diagnostics) = build(&prg);

        assert_eq!(diagnostics, vec!["10: class \"Animal\" already declared at line 1"]);
        let table = result.unwrap();
        assert_eq!(table.classes.len(), 1);
        assert_eq!(table.classes.spelling("ANIMAL"), Some("Animal"));
        let animal = table.classes.get("animal").unwrap();
        assert_eq!(animal.decl.name.line, 1);
        assert!(animal.fields.contains("name"));
        assert!(!animal.fields.contains("legs"));
        let speak = animal.methods.get("speak").unwrap();
        assert_eq!(speak.variables.len(), 2);
        assert_eq!(speak.variables.get("speak").unwrap().kind, VariableKind::Result);
        assert_eq!(speak.variables.get("sound").unwrap().kind, VariableKind::Local);
    }

    #[test]
    fn case_variants_behave_like_exact_duplicates() {
        let exact = program(vec![class("Foo", 1, vec![], vec![]), class("Foo", 2, vec![], vec![])]);
        let folded = program(vec![class("Foo", 1, vec![], vec![]), class("foo", 2, vec![], vec![])]);

        let (exact_result, exact_diagnostics) = build(&exact);
        let (folded_result, folded_diagnostics) = build(&folded);

        assert_eq!(exact_diagnostics, folded_diagnostics);
        assert_eq!(exact_result.unwrap().classes.len(), folded_result.unwrap().classes.len());
    }

    #[test]
    fn parameter_shadowing_function_name() {
        let prg = program(vec![class(
            "Shape",
            1,
            vec![],
            vec![method(
                "area",
                2,
                TypeDenoter::Integer,
                vec![var(&[("w", 2), ("Area", 2)], TypeDenoter::Integer)],
                vec![],
            )],
        )]);

        let (result, diagnostics) = build(&prg);

        assert_eq!(diagnostics, vec!["2: variable \"Area\" already declared at line 2"]);
        let failure = result.unwrap_err();
        assert_eq!(
            failure.errors,
            vec![DeclarationError::DuplicateVariable {
                name: "Area".to_owned(),
                first_line: 2,
                line: 2,
                span: None,
            }]
        );
    }

    #[test]
    fn local_shadowing_parameter() {
        let prg = program(vec![class(
            "Shape",
            1,
            vec![],
            vec![method(
                "scale",
                2,
                TypeDenoter::Real,
                vec![var(&[("factor", 2)], TypeDenoter::Real)],
                vec![var(&[("FACTOR", 3)], TypeDenoter::Integer)],
            )],
        )]);

        let (result, diagnostics) = build(&prg);

        assert!(result.is_err());
        assert_eq!(diagnostics, vec!["3: variable \"FACTOR\" already declared at line 2"]);
    }

    #[test]
    fn repeated_parameter_across_sections() {
        let prg = program(vec![class(
            "Point",
            1,
            vec![],
            vec![method(
                "move",
                2,
                TypeDenoter::Boolean,
                vec![
                    var(&[("dx", 2)], TypeDenoter::Integer),
                    var(&[("dx", 2)], TypeDenoter::Real),
                ],
                vec![],
            )],
        )]);

        let (result, diagnostics) = build(&prg);

        assert!(result.is_err());
        assert_eq!(diagnostics, vec!["2: variable \"dx\" already declared at line 2"]);
    }

    #[test]
    fn first_local_wins() {
        let prg = program(vec![class(
            "Counter",
            1,
            vec![],
            vec![method(
                "tick",
                2,
                TypeDenoter::Integer,
                vec![],
                vec![
                    var(&[("x", 3)], TypeDenoter::Integer),
                    var(&[("x", 7)], TypeDenoter::Real),
                ],
            )],
        )]);

        let (result, diagnostics) = build(&prg);

        assert_eq!(diagnostics, vec!["7: variable \"x\" already declared at line 3"]);
        let failure = result.unwrap_err();
        assert_eq!(failure.errors.len(), 1);
        assert_eq!(failure.errors[0].line(), 7);
    }

    #[test]
    fn field_and_method_may_share_a_name() {
        let prg = program(vec![class(
            "Account",
            1,
            vec![var(&[("balance", 2)], TypeDenoter::Real)],
            vec![method("Balance", 3, TypeDenoter::Real, vec![], vec![])],
        )]);

        let (result, diagnostics) = build(&prg);

        assert!(diagnostics.is_empty());
        let table = result.unwrap();
        let account = table.classes.get("account").unwrap();
        assert!(account.fields.contains("balance"));
        assert!(account.methods.contains("balance"));
    }

    #[test]
    fn repeated_field_keeps_first_declaration() {
        let prg = program(vec![class(
            "Account",
            1,
            vec![
                var(&[("owner", 2), ("id", 2)], TypeDenoter::Integer),
                var(&[("ID", 3)], TypeDenoter::Real),
            ],
            vec![],
        )]);

        let (result, diagnostics) = build(&prg);

        assert!(diagnostics.is_empty());
        let table = result.unwrap();
        let fields = &table.classes.get("Account").unwrap().fields;
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("id").unwrap().typ, TypeDenoter::Integer);
        assert_eq!(fields.spelling("id"), Some("id"));
    }

    #[test]
    fn duplicate_method_body_is_skipped() {
        let prg = program(vec![class(
            "Animal",
            1,
            vec![],
            vec![
                method("speak", 2, TypeDenoter::Char, vec![], vec![]),
                method(
                    "Speak",
                    5,
                    TypeDenoter::Char,
                    vec![var(&[("a", 5)], TypeDenoter::Char)],
                    vec![var(&[("a", 6)], TypeDenoter::Char)],
                ),
            ],
        )]);

        let (result, diagnostics) = build(&prg);

        assert_eq!(diagnostics, vec!["5: function \"Speak\" already declared at line 2"]);
        let failure = result.unwrap_err();
        assert!(matches!(
            failure.errors.as_slice(),
            [DeclarationError::DuplicateFunction { first_line: 2, line: 5, .. }]
        ));
    }

    #[test]
    fn single_conflict_fails_whole_program() {
        let prg = program(vec![
            animal(1),
            class(
                "Zoo",
                10,
                vec![var(&[("size", 11)], TypeDenoter::Integer)],
                vec![method(
                    "open",
                    12,
                    TypeDenoter::Boolean,
                    vec![],
                    vec![var(&[("open", 13)], TypeDenoter::Boolean)],
                )],
            ),
            class("Keeper", 20, vec![], vec![]),
        ]);

        let (result, diagnostics) = build(&prg);

        assert_eq!(diagnostics, vec!["13: variable \"open\" already declared at line 12"]);
        assert!(result.is_err());
    }

    #[test]
    fn conflicts_are_reported_in_program_order() {
        let prg = program(vec![
            class(
                "A",
                1,
                vec![],
                vec![
                    method("f", 2, TypeDenoter::Integer, vec![var(&[("f", 2)], TypeDenoter::Integer)], vec![]),
                    method("F", 4, TypeDenoter::Integer, vec![], vec![]),
                ],
            ),
            class("a", 6, vec![], vec![]),
            class(
                "B",
                8,
                vec![],
                vec![method(
                    "g",
                    9,
                    TypeDenoter::Integer,
                    vec![],
                    vec![var(&[("x", 10), ("y", 10), ("x", 11)], TypeDenoter::Char)],
                )],
            ),
        ]);

        let (result, diagnostics) = build(&prg);

        let expected = vec![
            "2: variable \"f\" already declared at line 2",
            "4: function \"F\" already declared at line 2",
            "6: class \"A\" already declared at line 1",
            "11: variable \"x\" already declared at line 10",
        ];
        assert_eq!(diagnostics, expected);
        let failure = result.unwrap_err();
        let lines: Vec<_> = failure.errors.iter().map(DeclarationError::line).collect();
        assert_eq!(lines, vec![2, 4, 6, 11]);
    }

    #[test]
    fn conflict_carries_source_span() {
        let mut prg = program(vec![class(
            "Cell",
            1,
            vec![],
            vec![method("get", 2, TypeDenoter::Integer, vec![], vec![])],
        )]);
        prg.classes[0].block.methods[0]
            .block
            .locals
            .push(VarDecl {
                names: vec![Ident::new("GET", 3).with_span(Span::new(40u32, 43u32))],
                typ: TypeDenoter::Integer,
            });

        let (result, _) = build(&prg);

        let failure = result.unwrap_err();
        let DeclarationError::DuplicateVariable { span: Some(span), .. } = &failure.errors[0] else {
            panic!("expected a labelled duplicate variable, got {:?}", failure.errors);
        };
        assert_eq!(span.offset(), 40);
        assert_eq!(span.len(), 3);
    }
}
