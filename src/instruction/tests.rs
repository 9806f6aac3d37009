// Copyright (C) 2026 FZI Forschungszentrum Informatik
// SPDX-License-Identifier: Apache-2.0

use super::*;

const ADD_X3_X1_X2: u32 = 0x002081b3;
const ADDI_X1_X0_5: u32 = 0x00500093;
const LW_X5_8_X2: u32 = 0x00812283;
const SW_X5_12_X2: u32 = 0x00512623;
const BEQ_X1_X2_0: u32 = 0x00208063;
const JAL_X1_0: u32 = 0x000000ef;
const JALR_X0_0_X1: u32 = 0x00008067;
const CSRRW_MSCRATCH_X1: u32 = 0x34009073;
const CSRRWI_MSCRATCH_5: u32 = 0x3402d073;
const ECALL: u32 = 0x00000073;
const LUI_X1_1: u32 = 0x000010b7;

#[test]
fn fields() {
    assert_eq!(format::opcode(ADD_X3_X1_X2), opcode::OP);
    assert_eq!(format::rd(ADD_X3_X1_X2), 3);
    assert_eq!(format::rs1(ADD_X3_X1_X2), 1);
    assert_eq!(format::rs2(ADD_X3_X1_X2), 2);
    assert_eq!(format::funct3(LW_X5_8_X2), 0b010);
    assert_eq!(format::rd(LW_X5_8_X2), 5);
    assert_eq!(format::rs1(SW_X5_12_X2), 2);
    assert_eq!(format::rs2(SW_X5_12_X2), 5);
    assert_eq!(format::rs1(CSRRWI_MSCRATCH_5), 5);
}

macro_rules! class_test {
    ($n:ident, $i:expr, $f:ident) => {
        #[test]
        fn $n() {
            assert_eq!(
                Class::decode($i),
                Class {
                    $f: true,
                    ..Default::default()
                }
            );
        }
    };
}

class_test!(decode_op, ADD_X3_X1_X2, register_op);
class_test!(decode_op_imm, ADDI_X1_X0_5, immediate_op);
class_test!(decode_load, LW_X5_8_X2, load);
class_test!(decode_store, SW_X5_12_X2, store);
class_test!(decode_branch, BEQ_X1_X2_0, branch);
class_test!(decode_jal, JAL_X1_0, jal);
class_test!(decode_jalr, JALR_X0_0_X1, jalr);
class_test!(decode_csrrw, CSRRW_MSCRATCH_X1, csr_write);
class_test!(decode_csrrwi, CSRRWI_MSCRATCH_5, csr_write);

#[test]
fn decode_unclassified() {
    assert_eq!(Class::decode(ECALL), Class::default());
    assert_eq!(Class::decode(LUI_X1_1), Class::default());
}

#[test]
fn operand_usage() {
    let uses = |insn| {
        let class = Class::decode(insn);
        (class.uses_rs1(insn), class.uses_rs2())
    };
    assert_eq!(uses(ADD_X3_X1_X2), (true, true));
    assert_eq!(uses(ADDI_X1_X0_5), (true, false));
    assert_eq!(uses(LW_X5_8_X2), (true, false));
    assert_eq!(uses(SW_X5_12_X2), (true, true));
    assert_eq!(uses(BEQ_X1_X2_0), (true, true));
    assert_eq!(uses(JAL_X1_0), (false, false));
    assert_eq!(uses(JALR_X0_0_X1), (true, false));
    assert_eq!(uses(CSRRW_MSCRATCH_X1), (true, false));
    assert_eq!(uses(CSRRWI_MSCRATCH_5), (false, false));
    assert_eq!(uses(LUI_X1_1), (false, false));
}

#[test]
fn jumps() {
    let branch = Class::decode(BEQ_X1_X2_0);
    assert!(!branch.jump_taken(false));
    assert!(branch.jump_taken(true));
    assert!(Class::decode(JAL_X1_0).jump_taken(false));
    assert!(Class::decode(JALR_X0_0_X1).jump_taken(false));
    assert!(!Class::decode(ADD_X3_X1_X2).jump_taken(true));
}

#[test]
fn csr_ops() {
    assert_eq!(CsrOp::from_insn(CSRRW_MSCRATCH_X1), Some(CsrOp::Csrrw));
    assert_eq!(CsrOp::from_insn(CSRRWI_MSCRATCH_5), Some(CsrOp::Csrrwi));
    assert_eq!(CsrOp::from_insn(ECALL), None);
    assert_eq!(CsrOp::try_from(0b100), Err(0b100));

    let register: [CsrOp; 3] = [CsrOp::Csrrw, CsrOp::Csrrs, CsrOp::Csrrc];
    let immediate: [CsrOp; 3] = [CsrOp::Csrrwi, CsrOp::Csrrsi, CsrOp::Csrrci];
    assert!(register.into_iter().all(CsrOp::uses_rs1));
    assert!(!immediate.into_iter().any(CsrOp::uses_rs1));
}
