//! Solidity ABI bindings for the ERC-20 token and the Gateway protocol's
//! on-chain contracts.

use alloy::sol;

sol!(
    #![sol(all_derives = true, rpc)]
    contract IERC20 {
        function balanceOf(address account) external view returns (uint256);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
    }
);

sol!(
    #![sol(all_derives = true, rpc)]
    contract IGatewayWallet {
        function deposit(address token, uint256 amount) external;
    }
);

sol!(
    #![sol(all_derives = true, rpc)]
    contract IGatewayMinter {
        function gatewayMint(bytes calldata attestation, bytes calldata signature) external;
    }
);
