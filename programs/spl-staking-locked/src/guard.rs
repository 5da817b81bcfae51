use crate::error::StakingError;
use anchor_lang::prelude::*;

#[allow(deprecated)]
use anchor_lang::solana_program::bpf_loader_upgradeable::{self, UpgradeableLoaderState};

/// Address of this program's `ProgramData` account.
pub fn program_data_address() -> Pubkey {
    Pubkey::find_program_address(&[crate::id().as_ref()], &bpf_loader_upgradeable::id()).0
}

/// Reads the upgrade authority recorded in the loader's `ProgramData` account.
fn upgrade_authority(program_data_account: &UncheckedAccount) -> Result<Pubkey> {
    let data = program_data_account
        .try_borrow_data()
        .map_err(|_| StakingError::InvalidProgramData)?;

    match bincode::deserialize::<UpgradeableLoaderState>(&data) {
        Ok(UpgradeableLoaderState::ProgramData {
            upgrade_authority_address,
            ..
        }) => upgrade_authority_address.ok_or_else(|| error!(StakingError::NoUpgradeAuthority)),
        _ => err!(StakingError::InvalidProgramData),
    }
}

/// Fails unless `signer` is the program's current upgrade authority.
pub fn require_upgrade_authority(
    program_data_account: &UncheckedAccount,
    signer: &Signer,
) -> Result<()> {
    let authority = upgrade_authority(program_data_account)?;
    require_keys_eq!(
        authority,
        signer.key(),
        StakingError::InvalidUpgradeAuthority
    );
    Ok(())
}
