//! Solidity interfaces of the deployed contracts.
//!
//! `sol!` generates the call structs and codecs consumed by
//! [`crate::calls`]. The declarations mirror the deployed ABIs; changing a
//! signature here changes the selector, so these must stay in lockstep with
//! the contracts.

use alloy_sol_types::sol;

sol! {
    /// Vesting vault: one allocation per beneficiary, granted out of a
    /// fixed set of categories, claimable as it unlocks.
    interface IVestingVault {
        function allocations(address beneficiary) external view returns (
            uint256 category,
            uint256 total,
            uint256 tgeUnlock,
            uint256 cliffMonths,
            uint256 vestingMonths,
            uint256 claimPerSecond,
            uint256 claimed,
            uint256 startTimestamp
        );

        function owner() external view returns (address);

        function balanceOf(address holder) external view returns (uint256);

        function categories(uint256 index) external view returns (
            uint256 totalAmount,
            uint256 tgePercent,
            uint256 cliffMonths,
            uint256 vestingMonths,
            uint256 allocated,
            bool usesPerMille
        );

        function addressChangeApproved(address beneficiary) external view returns (bool);

        function claim() external;

        function allocateBatch(
            uint256 category,
            address[] calldata beneficiaries,
            uint256[] calldata amounts
        ) external;

        function revokeAllocation(address beneficiary) external;

        function changeAddress(address oldAddress, address newAddress) external;

        function approveAddressChange() external;

        function revokeAddressChangeApproval() external;

        function emergencyWithdraw(address to) external;
    }

    /// Companion airdropper for straight batch transfers outside the
    /// vesting schedule.
    interface IAirdropper {
        function owner() external view returns (address);

        function batchTransfer(
            address token,
            address[] calldata recipients,
            uint256[] calldata amounts
        ) external;
    }
}
