use alloy::sol;

// Aave Pool Contract
sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    #[derive(Debug)]
    contract AavePoolContract {
        struct ReserveConfigurationMap {
            uint256 data;
        }

        struct ReserveData {
            ReserveConfigurationMap configuration;
            uint128 liquidityIndex;
            uint128 currentLiquidityRate;
            uint128 variableBorrowIndex;
            uint128 currentVariableBorrowRate;
            uint128 currentStableBorrowRate;
            uint40 lastUpdateTimestamp;
            uint16 id;
            address aTokenAddress;
            address stableDebtTokenAddress;
            address variableDebtTokenAddress;
            address interestRateStrategyAddress;
            uint128 accruedToTreasury;
            uint128 unbacked;
            uint128 isolationModeTotalDebt;
        }

        function getReservesList() external view returns (address[] memory reserves);
        function getReserveData(address asset) external view returns (ReserveData memory data);
    }
);

// AToken (interest-bearing deposit token)
sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    #[derive(Debug)]
    contract ATokenContract {
        function balanceOf(address account) external view returns (uint256 balance);
    }
);

// Stable-rate debt token
sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    #[derive(Debug)]
    contract StableDebtTokenContract {
        function balanceOf(address account) external view returns (uint256 balance);
    }
);

// Variable-rate debt token
sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    #[derive(Debug)]
    contract VariableDebtTokenContract {
        function balanceOf(address account) external view returns (uint256 balance);
    }
);

// Generic ERC20, used for reserve metadata lookups
sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    #[derive(Debug)]
    contract Erc20Contract {
        function symbol() external view returns (string memory symbol);
        function decimals() external view returns (uint8 decimals);
    }
);
