//! Builtin chain table.
//!
//! Domain ids follow the cross-chain messaging protocol's addressing
//! scheme; a mainnet and its test network share a domain.

use super::{ChainRecord, NativeCurrency};

const ETH: NativeCurrency = NativeCurrency {
    name: "Ether",
    symbol: "ETH",
    decimals: 18,
};

pub(super) fn builtin() -> Vec<ChainRecord> {
    vec![
        ChainRecord {
            chain_id: 1,
            name: "Ethereum",
            slug: "ethereum",
            domain: 0,
            bridge_key: "Ethereum",
            rpc_url: Some("https://eth.llamarpc.com"),
            explorer_url: Some("https://etherscan.io"),
            testnet: false,
            native_currency: ETH,
        },
        ChainRecord {
            chain_id: 11155111,
            name: "Ethereum Sepolia",
            slug: "ethereum-sepolia",
            domain: 0,
            bridge_key: "EthereumSepolia",
            rpc_url: Some("https://sepolia.drpc.org"),
            explorer_url: Some("https://sepolia.etherscan.io"),
            testnet: true,
            native_currency: ETH,
        },
        ChainRecord {
            chain_id: 43114,
            name: "Avalanche",
            slug: "avalanche",
            domain: 1,
            bridge_key: "Avalanche",
            rpc_url: Some("https://api.avax.network/ext/bc/C/rpc"),
            explorer_url: Some("https://snowtrace.io"),
            testnet: false,
            native_currency: NativeCurrency {
                name: "Avalanche",
                symbol: "AVAX",
                decimals: 18,
            },
        },
        ChainRecord {
            chain_id: 43113,
            name: "Avalanche Fuji",
            slug: "avalanche-fuji",
            domain: 1,
            bridge_key: "AvalancheFuji",
            rpc_url: Some("https://api.avax-test.network/ext/bc/C/rpc"),
            explorer_url: Some("https://testnet.snowtrace.io"),
            testnet: true,
            native_currency: NativeCurrency {
                name: "Avalanche",
                symbol: "AVAX",
                decimals: 18,
            },
        },
        ChainRecord {
            chain_id: 10,
            name: "OP Mainnet",
            slug: "optimism",
            domain: 2,
            bridge_key: "Optimism",
            rpc_url: Some("https://mainnet.optimism.io"),
            explorer_url: Some("https://optimistic.etherscan.io"),
            testnet: false,
            native_currency: ETH,
        },
        ChainRecord {
            chain_id: 11155420,
            name: "OP Sepolia",
            slug: "optimism-sepolia",
            domain: 2,
            bridge_key: "OptimismSepolia",
            rpc_url: Some("https://sepolia.optimism.io"),
            explorer_url: Some("https://sepolia-optimism.etherscan.io"),
            testnet: true,
            native_currency: ETH,
        },
        ChainRecord {
            chain_id: 42161,
            name: "Arbitrum One",
            slug: "arbitrum",
            domain: 3,
            bridge_key: "Arbitrum",
            rpc_url: Some("https://arb1.arbitrum.io/rpc"),
            explorer_url: Some("https://arbiscan.io"),
            testnet: false,
            native_currency: ETH,
        },
        ChainRecord {
            chain_id: 421614,
            name: "Arbitrum Sepolia",
            slug: "arbitrum-sepolia",
            domain: 3,
            bridge_key: "ArbitrumSepolia",
            rpc_url: Some("https://sepolia-rollup.arbitrum.io/rpc"),
            explorer_url: Some("https://sepolia.arbiscan.io"),
            testnet: true,
            native_currency: ETH,
        },
        ChainRecord {
            chain_id: 8453,
            name: "Base",
            slug: "base",
            domain: 6,
            bridge_key: "Base",
            rpc_url: Some("https://mainnet.base.org"),
            explorer_url: Some("https://basescan.org"),
            testnet: false,
            native_currency: ETH,
        },
        ChainRecord {
            chain_id: 84532,
            name: "Base Sepolia",
            slug: "base-sepolia",
            domain: 6,
            bridge_key: "BaseSepolia",
            rpc_url: Some("https://sepolia.base.org"),
            explorer_url: Some("https://sepolia.basescan.org"),
            testnet: true,
            native_currency: ETH,
        },
        ChainRecord {
            chain_id: 137,
            name: "Polygon PoS",
            slug: "polygon",
            domain: 7,
            bridge_key: "Polygon",
            rpc_url: Some("https://polygon-rpc.com"),
            explorer_url: Some("https://polygonscan.com"),
            testnet: false,
            native_currency: NativeCurrency {
                name: "Polygon Ecosystem Token",
                symbol: "POL",
                decimals: 18,
            },
        },
        ChainRecord {
            chain_id: 80002,
            name: "Polygon Amoy",
            slug: "polygon-amoy",
            domain: 7,
            bridge_key: "PolygonAmoy",
            rpc_url: Some("https://rpc-amoy.polygon.technology"),
            explorer_url: Some("https://amoy.polygonscan.com"),
            testnet: true,
            native_currency: NativeCurrency {
                name: "Polygon Ecosystem Token",
                symbol: "POL",
                decimals: 18,
            },
        },
        ChainRecord {
            chain_id: 130,
            name: "Unichain",
            slug: "unichain",
            domain: 10,
            bridge_key: "Unichain",
            rpc_url: Some("https://mainnet.unichain.org"),
            explorer_url: Some("https://uniscan.xyz"),
            testnet: false,
            native_currency: ETH,
        },
        ChainRecord {
            chain_id: 1301,
            name: "Unichain Sepolia",
            slug: "unichain-sepolia",
            domain: 10,
            bridge_key: "UnichainSepolia",
            rpc_url: Some("https://sepolia.unichain.org"),
            explorer_url: Some("https://sepolia.uniscan.xyz"),
            testnet: true,
            native_currency: ETH,
        },
        ChainRecord {
            chain_id: 59144,
            name: "Linea",
            slug: "linea",
            domain: 11,
            bridge_key: "Linea",
            rpc_url: Some("https://rpc.linea.build"),
            explorer_url: Some("https://lineascan.build"),
            testnet: false,
            native_currency: ETH,
        },
        ChainRecord {
            chain_id: 59141,
            name: "Linea Sepolia",
            slug: "linea-sepolia",
            domain: 11,
            bridge_key: "LineaSepolia",
            rpc_url: Some("https://rpc.sepolia.linea.build"),
            explorer_url: Some("https://sepolia.lineascan.build"),
            testnet: true,
            native_currency: ETH,
        },
        ChainRecord {
            chain_id: 81224,
            name: "Codex",
            slug: "codex",
            domain: 12,
            bridge_key: "Codex",
            rpc_url: Some("https://rpc.codex.xyz"),
            explorer_url: Some("https://explorer.codex.xyz"),
            testnet: false,
            native_currency: ETH,
        },
        ChainRecord {
            chain_id: 812242,
            name: "Codex Testnet",
            slug: "codex-testnet",
            domain: 12,
            bridge_key: "CodexTestnet",
            rpc_url: Some("https://rpc.codex-stg.xyz"),
            explorer_url: Some("https://explorer.codex-stg.xyz"),
            testnet: true,
            native_currency: ETH,
        },
        ChainRecord {
            chain_id: 146,
            name: "Sonic",
            slug: "sonic",
            domain: 13,
            bridge_key: "Sonic",
            rpc_url: Some("https://rpc.soniclabs.com"),
            explorer_url: Some("https://sonicscan.org"),
            testnet: false,
            native_currency: NativeCurrency {
                name: "Sonic",
                symbol: "S",
                decimals: 18,
            },
        },
        ChainRecord {
            chain_id: 57054,
            name: "Sonic Blaze",
            slug: "sonic-blaze",
            domain: 13,
            bridge_key: "SonicBlaze",
            rpc_url: Some("https://rpc.blaze.soniclabs.com"),
            explorer_url: Some("https://testnet.sonicscan.org"),
            testnet: true,
            native_currency: NativeCurrency {
                name: "Sonic",
                symbol: "S",
                decimals: 18,
            },
        },
        ChainRecord {
            chain_id: 480,
            name: "World Chain",
            slug: "worldchain",
            domain: 14,
            bridge_key: "WorldChain",
            rpc_url: Some("https://worldchain-mainnet.g.alchemy.com/public"),
            explorer_url: Some("https://worldscan.org"),
            testnet: false,
            native_currency: ETH,
        },
        ChainRecord {
            chain_id: 4801,
            name: "World Chain Sepolia",
            slug: "worldchain-sepolia",
            domain: 14,
            bridge_key: "WorldChainSepolia",
            rpc_url: Some("https://worldchain-sepolia.g.alchemy.com/public"),
            explorer_url: Some("https://sepolia.worldscan.org"),
            testnet: true,
            native_currency: ETH,
        },
        ChainRecord {
            chain_id: 143,
            name: "Monad",
            slug: "monad",
            domain: 15,
            bridge_key: "Monad",
            rpc_url: Some("https://rpc.monad.xyz"),
            explorer_url: Some("https://monadexplorer.com"),
            testnet: false,
            native_currency: NativeCurrency {
                name: "Monad",
                symbol: "MON",
                decimals: 18,
            },
        },
        ChainRecord {
            chain_id: 10143,
            name: "Monad Testnet",
            slug: "monad-testnet",
            domain: 15,
            bridge_key: "MonadTestnet",
            rpc_url: Some("https://testnet-rpc.monad.xyz"),
            explorer_url: Some("https://testnet.monadexplorer.com"),
            testnet: true,
            native_currency: NativeCurrency {
                name: "Monad",
                symbol: "MON",
                decimals: 18,
            },
        },
        ChainRecord {
            chain_id: 1329,
            name: "Sei",
            slug: "sei",
            domain: 16,
            bridge_key: "Sei",
            rpc_url: Some("https://evm-rpc.sei-apis.com"),
            explorer_url: Some("https://seitrace.com"),
            testnet: false,
            native_currency: NativeCurrency {
                name: "Sei",
                symbol: "SEI",
                decimals: 18,
            },
        },
        ChainRecord {
            chain_id: 1328,
            name: "Sei Testnet",
            slug: "sei-testnet",
            domain: 16,
            bridge_key: "SeiTestnet",
            rpc_url: Some("https://evm-rpc-testnet.sei-apis.com"),
            explorer_url: Some("https://testnet.seitrace.com"),
            testnet: true,
            native_currency: NativeCurrency {
                name: "Sei",
                symbol: "SEI",
                decimals: 18,
            },
        },
        ChainRecord {
            chain_id: 57073,
            name: "Ink",
            slug: "ink",
            domain: 17,
            bridge_key: "Ink",
            rpc_url: Some("https://rpc-gel.inkonchain.com"),
            explorer_url: Some("https://explorer.inkonchain.com"),
            testnet: false,
            native_currency: ETH,
        },
        ChainRecord {
            chain_id: 763373,
            name: "Ink Sepolia",
            slug: "ink-sepolia",
            domain: 17,
            bridge_key: "InkSepolia",
            rpc_url: Some("https://rpc-gel-sepolia.inkonchain.com"),
            explorer_url: Some("https://explorer-sepolia.inkonchain.com"),
            testnet: true,
            native_currency: ETH,
        },
        ChainRecord {
            chain_id: 50,
            name: "XDC Network",
            slug: "xdc",
            domain: 18,
            bridge_key: "Xdc",
            rpc_url: Some("https://rpc.xdcrpc.com"),
            explorer_url: Some("https://xdcscan.com"),
            testnet: false,
            native_currency: NativeCurrency {
                name: "XDC",
                symbol: "XDC",
                decimals: 18,
            },
        },
        // Arc settles gas in USDC rather than a gas-only native asset.
        ChainRecord {
            chain_id: 5042002,
            name: "Arc Testnet",
            slug: "arc-testnet",
            domain: 26,
            bridge_key: "ArcTestnet",
            rpc_url: Some("https://rpc.testnet.arc.network"),
            explorer_url: Some("https://explorer.testnet.arc.network"),
            testnet: true,
            native_currency: NativeCurrency {
                name: "USD Coin",
                symbol: "USDC",
                decimals: 6,
            },
        },
    ]
}
