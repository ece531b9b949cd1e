//! LLVM IR generator.

use inkwell::builder::Builder;
use inkwell::context::Context;
use inkwell::module::{Linkage, Module};
use inkwell::types::IntType;
use inkwell::values::{FunctionValue, IntValue, PointerValue};
use inkwell::{AddressSpace, IntPredicate};

use gsmc_par::{
    Assignment, AssignOp, BinOp, CmpOp, Declaration, Expr, Final, FinalKind,
    IfStmt, IterStmt, Logic, LogicOp, Program, Stmt,
};
use gsmc_util::{DiagnosticBuilder, FxHashMap, Handler};

use crate::error::{CodeGenError, Result};

/// Lowers a program into an LLVM module.
///
/// The generator owns the module and builder for one compilation; the
/// context is borrowed so the caller controls its lifetime. Variables live
/// in `i32` stack slots mapped by name.
pub struct IrGen<'a, 'ctx> {
    context: &'ctx Context,
    module: Module<'ctx>,
    builder: Builder<'ctx>,

    /// Declared name -> stack slot.
    slots: FxHashMap<&'a str, PointerValue<'ctx>>,

    /// The external `void @gsm_write(i32)` sink.
    write_fn: FunctionValue<'ctx>,

    /// Diagnostics shared with the rest of the pipeline.
    handler: &'a Handler,
}

impl<'a, 'ctx> IrGen<'a, 'ctx> {
    /// Create a generator with an empty module named `gsm` and the
    /// `gsm_write` declaration in place.
    pub fn new(context: &'ctx Context, handler: &'a Handler) -> Self {
        let module = context.create_module("gsm");
        let builder = context.create_builder();

        let void_type = context.void_type();
        let i32_type = context.i32_type();
        let write_fn_type = void_type.fn_type(&[i32_type.into()], false);
        let write_fn =
            module.add_function("gsm_write", write_fn_type, Some(Linkage::External));

        Self {
            context,
            module,
            builder,
            slots: FxHashMap::default(),
            write_fn,
            handler,
        }
    }

    /// Lower a whole program into `@main`, ending with `ret i32 0`.
    pub fn compile(&mut self, program: &Program<'a>) -> Result<()> {
        let i32_type = self.i32_type();
        let ptr_type = self.context.ptr_type(AddressSpace::default());

        let main_type = i32_type.fn_type(&[i32_type.into(), ptr_type.into()], false);
        let main_fn = self
            .module
            .add_function("main", main_type, Some(Linkage::External));

        let entry = self.context.append_basic_block(main_fn, "entry");
        self.builder.position_at_end(entry);

        for stmt in program {
            self.gen_stmt(stmt)?;
        }

        self.builder
            .build_return(Some(&i32_type.const_int(0, false)))
            .map_err(|e| {
                CodeGenError::LlvmOperationFailed(format!("failed to build return: {e}"))
            })?;

        Ok(())
    }

    /// Emit the module as textual LLVM IR.
    pub fn emit_ir(&self) -> String {
        self.module.print_to_string().to_string()
    }

    /// Get the LLVM module.
    pub fn module(&self) -> &Module<'ctx> {
        &self.module
    }

    fn i32_type(&self) -> IntType<'ctx> {
        self.context.i32_type()
    }

    /// The function the builder is currently emitting into.
    fn current_fn(&self) -> Result<FunctionValue<'ctx>> {
        self.builder
            .get_insert_block()
            .and_then(|block| block.get_parent())
            .ok_or_else(|| {
                CodeGenError::Internal("builder has no insertion block".to_string())
            })
    }

    /// Look up a declared variable's stack slot.
    fn slot(&self, name: &str) -> Result<PointerValue<'ctx>> {
        self.slots
            .get(name)
            .copied()
            .ok_or_else(|| CodeGenError::UnknownVariable(name.to_string()))
    }

    /// Load the current value of a slot.
    fn load(&self, slot: PointerValue<'ctx>, name: &str) -> Result<IntValue<'ctx>> {
        let loaded = self
            .builder
            .build_load(self.i32_type(), slot, name)
            .map_err(|e| {
                CodeGenError::LlvmOperationFailed(format!("failed to load '{name}': {e}"))
            })?;
        Ok(loaded.into_int_value())
    }

    fn gen_stmt(&mut self, stmt: &Stmt<'a>) -> Result<()> {
        match stmt {
            Stmt::Declaration(decl) => self.gen_declaration(decl),
            Stmt::Assignment(assign) => self.gen_assignment(assign),
            Stmt::If(if_stmt) => self.gen_if(if_stmt),
            Stmt::Loop(iter) => self.gen_loop(iter),
        }
    }

    /// Allocate and initialize each declared variable in order.
    ///
    /// A name's slot exists before its own initializer is evaluated, and
    /// earlier names of the same declaration are already stored, so
    /// `int a = 1, b = a;` reads the fresh value of `a`. Declarations do
    /// not call `gsm_write`.
    fn gen_declaration(&mut self, decl: &Declaration<'a>) -> Result<()> {
        for (index, &name) in decl.names.iter().enumerate() {
            let slot = self.builder.build_alloca(self.i32_type(), name).map_err(|e| {
                CodeGenError::LlvmOperationFailed(format!(
                    "failed to allocate slot for '{name}': {e}"
                ))
            })?;
            self.slots.insert(name, slot);

            let value = match decl.inits.get(index) {
                Some(init) => self.gen_expr(init)?,
                None => self.i32_type().const_int(0, false),
            };
            self.builder.build_store(slot, value).map_err(|e| {
                CodeGenError::LlvmOperationFailed(format!(
                    "failed to initialize '{name}': {e}"
                ))
            })?;
        }
        Ok(())
    }

    /// Lower an assignment: evaluate the right-hand side, fold in the
    /// current value for compound forms, store, and report the stored
    /// value through `gsm_write`.
    fn gen_assignment(&mut self, assign: &Assignment<'a>) -> Result<()> {
        let name = assign.target.text;
        let rhs = self.gen_expr(&assign.value)?;
        let slot = self.slot(name)?;

        let stored = match assign.op {
            AssignOp::Assign => rhs,
            AssignOp::AddAssign => {
                let cur = self.load(slot, name)?;
                self.builder.build_int_nsw_add(cur, rhs, "addtmp").map_err(|e| {
                    CodeGenError::LlvmOperationFailed(format!("failed to build add: {e}"))
                })?
            },
            AssignOp::SubAssign => {
                let cur = self.load(slot, name)?;
                self.builder.build_int_nsw_sub(cur, rhs, "subtmp").map_err(|e| {
                    CodeGenError::LlvmOperationFailed(format!("failed to build sub: {e}"))
                })?
            },
            AssignOp::MulAssign => {
                let cur = self.load(slot, name)?;
                self.builder.build_int_nsw_mul(cur, rhs, "multmp").map_err(|e| {
                    CodeGenError::LlvmOperationFailed(format!("failed to build mul: {e}"))
                })?
            },
            AssignOp::DivAssign => {
                let cur = self.load(slot, name)?;
                self.builder
                    .build_int_signed_div(cur, rhs, "divtmp")
                    .map_err(|e| {
                        CodeGenError::LlvmOperationFailed(format!(
                            "failed to build div: {e}"
                        ))
                    })?
            },
            AssignOp::ModAssign => {
                let cur = self.load(slot, name)?;
                self.builder
                    .build_int_signed_rem(cur, rhs, "remtmp")
                    .map_err(|e| {
                        CodeGenError::LlvmOperationFailed(format!(
                            "failed to build rem: {e}"
                        ))
                    })?
            },
            AssignOp::PowAssign => {
                let cur = self.load(slot, name)?;
                self.gen_pow(cur, rhs)?
            },
        };

        self.builder.build_store(slot, stored).map_err(|e| {
            CodeGenError::LlvmOperationFailed(format!("failed to store '{name}': {e}"))
        })?;

        self.builder
            .build_call(self.write_fn, &[stored.into()], "")
            .map_err(|e| {
                CodeGenError::LlvmOperationFailed(format!(
                    "failed to call gsm_write: {e}"
                ))
            })?;

        Ok(())
    }

    fn gen_expr(&mut self, expr: &Expr<'a>) -> Result<IntValue<'ctx>> {
        match expr {
            Expr::Final(f) => self.gen_final(f),
            Expr::Binary(bin) => {
                let left = self.gen_expr(&bin.left)?;
                let right = self.gen_expr(&bin.right)?;
                match bin.op {
                    BinOp::Add => self
                        .builder
                        .build_int_nsw_add(left, right, "addtmp")
                        .map_err(|e| {
                            CodeGenError::LlvmOperationFailed(format!(
                                "failed to build add: {e}"
                            ))
                        }),
                    BinOp::Sub => self
                        .builder
                        .build_int_nsw_sub(left, right, "subtmp")
                        .map_err(|e| {
                            CodeGenError::LlvmOperationFailed(format!(
                                "failed to build sub: {e}"
                            ))
                        }),
                    BinOp::Mul => self
                        .builder
                        .build_int_nsw_mul(left, right, "multmp")
                        .map_err(|e| {
                            CodeGenError::LlvmOperationFailed(format!(
                                "failed to build mul: {e}"
                            ))
                        }),
                    BinOp::Div => self
                        .builder
                        .build_int_signed_div(left, right, "divtmp")
                        .map_err(|e| {
                            CodeGenError::LlvmOperationFailed(format!(
                                "failed to build div: {e}"
                            ))
                        }),
                    BinOp::Mod => self
                        .builder
                        .build_int_signed_rem(left, right, "remtmp")
                        .map_err(|e| {
                            CodeGenError::LlvmOperationFailed(format!(
                                "failed to build rem: {e}"
                            ))
                        }),
                    BinOp::Pow => self.gen_pow(left, right),
                }
            },
        }
    }

    fn gen_final(&mut self, f: &Final<'a>) -> Result<IntValue<'ctx>> {
        match f.kind {
            FinalKind::Number => {
                let value: i64 = f.text.parse().map_err(|_| {
                    CodeGenError::InvalidLiteral(f.text.to_string())
                })?;
                Ok(self.i32_type().const_int(value as u64, true))
            },
            FinalKind::Ident => {
                let slot = self.slot(f.text)?;
                self.load(slot, f.text)
            },
        }
    }

    /// Exponentiation by a constant: unrolled as `exponent` multiplications
    /// by the base, starting from `1`, with signed-wraparound `nsw mul`.
    /// A negative constant unrolls zero times.
    ///
    /// The exponent must be an IR-level constant; anything else is a
    /// diagnosed language restriction and the node contributes the unroll
    /// seed `1` with no exponentiation IR.
    fn gen_pow(
        &mut self,
        base: IntValue<'ctx>,
        exponent: IntValue<'ctx>,
    ) -> Result<IntValue<'ctx>> {
        let one = self.i32_type().const_int(1, false);

        let Some(count) = exponent.get_sign_extended_constant() else {
            DiagnosticBuilder::error("Exponent must be a constant integer")
                .emit(self.handler);
            return Ok(one);
        };

        let mut result = one;
        for _ in 0..count.max(0) {
            result = self
                .builder
                .build_int_nsw_mul(result, base, "powtmp")
                .map_err(|e| {
                    CodeGenError::LlvmOperationFailed(format!(
                        "failed to build pow step: {e}"
                    ))
                })?;
        }
        Ok(result)
    }

    fn gen_logic(&mut self, logic: &Logic<'a>) -> Result<IntValue<'ctx>> {
        match logic {
            Logic::Comparison(cmp) => {
                let left = self.gen_expr(&cmp.left)?;
                let right = self.gen_expr(&cmp.right)?;
                let predicate = match cmp.op {
                    CmpOp::Eq => IntPredicate::EQ,
                    CmpOp::Ne => IntPredicate::NE,
                    CmpOp::Lt => IntPredicate::SLT,
                    CmpOp::Gt => IntPredicate::SGT,
                    CmpOp::Le => IntPredicate::SLE,
                    CmpOp::Ge => IntPredicate::SGE,
                };
                self.builder
                    .build_int_compare(predicate, left, right, "cmptmp")
                    .map_err(|e| {
                        CodeGenError::LlvmOperationFailed(format!(
                            "failed to build compare: {e}"
                        ))
                    })
            },
            // Both sides are always evaluated; `and`/`or` combine the
            // one-bit results bitwise, not by branching.
            Logic::Logical(log) => {
                let left = self.gen_logic(&log.left)?;
                let right = self.gen_logic(&log.right)?;
                match log.op {
                    LogicOp::And => {
                        self.builder.build_and(left, right, "andtmp").map_err(|e| {
                            CodeGenError::LlvmOperationFailed(format!(
                                "failed to build and: {e}"
                            ))
                        })
                    },
                    LogicOp::Or => {
                        self.builder.build_or(left, right, "ortmp").map_err(|e| {
                            CodeGenError::LlvmOperationFailed(format!(
                                "failed to build or: {e}"
                            ))
                        })
                    },
                }
            },
        }
    }

    /// Lower `if/elif/else`.
    ///
    /// Each cond block's conditional branch is emitted only after the next
    /// block in the chain exists. The final cond block branches on its own
    /// condition: to the else body when one exists, otherwise straight to
    /// `after.if`.
    fn gen_if(&mut self, if_stmt: &IfStmt<'a>) -> Result<()> {
        let function = self.current_fn()?;
        let cond_bb = self.context.append_basic_block(function, "if.cond");
        let body_bb = self.context.append_basic_block(function, "if.body");
        let after_bb = self.context.append_basic_block(function, "after.if");

        self.builder.build_unconditional_branch(cond_bb).map_err(|e| {
            CodeGenError::LlvmOperationFailed(format!("failed to enter if.cond: {e}"))
        })?;

        self.builder.position_at_end(cond_bb);
        let cond_val = self.gen_logic(&if_stmt.cond)?;

        self.builder.position_at_end(body_bb);
        for assign in &if_stmt.then_body {
            self.gen_assignment(assign)?;
        }
        self.builder.build_unconditional_branch(after_bb).map_err(|e| {
            CodeGenError::LlvmOperationFailed(format!("failed to close if.body: {e}"))
        })?;

        let mut prev_cond_bb = cond_bb;
        let mut prev_body_bb = body_bb;
        let mut prev_cond_val = cond_val;

        for elif in &if_stmt.elifs {
            let elif_cond_bb = self.context.append_basic_block(function, "elif.cond");
            let elif_body_bb = self.context.append_basic_block(function, "elif.body");

            self.builder.position_at_end(prev_cond_bb);
            self.builder
                .build_conditional_branch(prev_cond_val, prev_body_bb, elif_cond_bb)
                .map_err(|e| {
                    CodeGenError::LlvmOperationFailed(format!(
                        "failed to chain elif.cond: {e}"
                    ))
                })?;

            self.builder.position_at_end(elif_cond_bb);
            let elif_cond_val = self.gen_logic(&elif.cond)?;

            self.builder.position_at_end(elif_body_bb);
            for assign in &elif.body {
                self.gen_assignment(assign)?;
            }
            self.builder.build_unconditional_branch(after_bb).map_err(|e| {
                CodeGenError::LlvmOperationFailed(format!(
                    "failed to close elif.body: {e}"
                ))
            })?;

            prev_cond_bb = elif_cond_bb;
            prev_body_bb = elif_body_bb;
            prev_cond_val = elif_cond_val;
        }

        if !if_stmt.else_body.is_empty() {
            let else_bb = self.context.append_basic_block(function, "else.body");

            self.builder.position_at_end(else_bb);
            for assign in &if_stmt.else_body {
                self.gen_assignment(assign)?;
            }
            self.builder.build_unconditional_branch(after_bb).map_err(|e| {
                CodeGenError::LlvmOperationFailed(format!(
                    "failed to close else.body: {e}"
                ))
            })?;

            self.builder.position_at_end(prev_cond_bb);
            self.builder
                .build_conditional_branch(prev_cond_val, prev_body_bb, else_bb)
                .map_err(|e| {
                    CodeGenError::LlvmOperationFailed(format!(
                        "failed to branch to else.body: {e}"
                    ))
                })?;
        } else {
            self.builder.position_at_end(prev_cond_bb);
            self.builder
                .build_conditional_branch(prev_cond_val, prev_body_bb, after_bb)
                .map_err(|e| {
                    CodeGenError::LlvmOperationFailed(format!(
                        "failed to branch to after.if: {e}"
                    ))
                })?;
        }

        self.builder.position_at_end(after_bb);
        Ok(())
    }

    /// Lower `loopc`: condition block, body block, exit block.
    fn gen_loop(&mut self, iter: &IterStmt<'a>) -> Result<()> {
        let function = self.current_fn()?;
        let cond_bb = self.context.append_basic_block(function, "loopc.cond");
        let body_bb = self.context.append_basic_block(function, "loopc.body");
        let after_bb = self.context.append_basic_block(function, "after.loopc");

        self.builder.build_unconditional_branch(cond_bb).map_err(|e| {
            CodeGenError::LlvmOperationFailed(format!("failed to enter loopc.cond: {e}"))
        })?;

        self.builder.position_at_end(cond_bb);
        let cond_val = self.gen_logic(&iter.cond)?;
        self.builder
            .build_conditional_branch(cond_val, body_bb, after_bb)
            .map_err(|e| {
                CodeGenError::LlvmOperationFailed(format!(
                    "failed to branch on loopc.cond: {e}"
                ))
            })?;

        self.builder.position_at_end(body_bb);
        for assign in &iter.body {
            self.gen_assignment(assign)?;
        }
        self.builder.build_unconditional_branch(cond_bb).map_err(|e| {
            CodeGenError::LlvmOperationFailed(format!("failed to close loopc.body: {e}"))
        })?;

        self.builder.position_at_end(after_bb);
        Ok(())
    }
}
