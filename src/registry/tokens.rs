//! Builtin stablecoin table.

use std::collections::BTreeMap;

use alloy::primitives::address;

use super::TokenRecord;

pub(super) fn builtin() -> Vec<TokenRecord> {
    vec![
        TokenRecord {
            symbol: "USDC",
            name: "USD Coin",
            decimals: 6,
            deployments: BTreeMap::from([
                (1, address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48")),
                (10, address!("0x0b2C639c533813f4Aa9D7837CAf62653d097Ff85")),
                (137, address!("0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359")),
                (130, address!("0x078D782b760474a361dDA0AF3839290b0EF57AD6")),
                (146, address!("0x29219dd400f2Bf60E5a23d13Be72B486D4038894")),
                (480, address!("0x79A02482A880bCE3F13e09Da970dC34db4CD24d1")),
                (1329, address!("0xe15fC38F6D8c56aF07bbCBe3BAf5708A2Bf42392")),
                (8453, address!("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913")),
                (42161, address!("0xaf88d065e77c8cC2239327C5EDb3A432268e5831")),
                (43114, address!("0xB97EF9Ef8734C71904D8002F8b6Bc66Dd9c48a6E")),
                (59144, address!("0x176211869cA2b568f2A7D4EE941E073a821EE1ff")),
                (1301, address!("0x31d0220469e10c4E71834a79b1f276d740d3768F")),
                (1328, address!("0x4fCF1784B31630811181f670Aea7A7bEF803eaED")),
                (4801, address!("0x66145f38cBAC35Ca6F1Dfb4914dF98F1614aeA88")),
                (43113, address!("0x5425890298aed601595a70AB815c96711a31Bc65")),
                (57054, address!("0xA4879Fed32Ecbef99399e5cbC247E533421C4eC6")),
                (59141, address!("0xFEce4462D57bD51A6A552365A011b95f0E16d9B7")),
                (80002, address!("0x41E94Eb019C0762f9Bfcf9Fb1E58725BfB0e7582")),
                (84532, address!("0x036CbD53842c5426634e7929541eC2318f3dCF7e")),
                (421614, address!("0x75faf114eafb1BDbe2F0316DF893fd58CE46AA4d")),
                (11155111, address!("0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238")),
                (11155420, address!("0x5fd84259d66Cd46123540766Be93DFE6D43130D7")),
                (5042002, address!("0x3600D4f2d2A45dAeED8A20d1b6Edc58Ba7aE2c95")),
            ]),
        },
        TokenRecord {
            symbol: "EURC",
            name: "Euro Coin",
            decimals: 6,
            deployments: BTreeMap::from([
                (1, address!("0x1aBaEA1f7C830bD89Acc67eC4af516284b1bC33c")),
                (8453, address!("0x60a3E35Cc302bFA44Cb288Bc5a4F316Fdb1adb42")),
                (43114, address!("0xC891EB4cbdEFf6e073e859e987815Ed1505c2ACD")),
                (43113, address!("0x5E44db7996C682E92a960b65AC713a54AD815c6B")),
                (84532, address!("0x808456652fdb597867f38412077A9182bf77359F")),
                (11155111, address!("0x08210F9170F89Ab7658F0B5E3fF39b0E03C594D4")),
            ]),
        },
    ]
}
