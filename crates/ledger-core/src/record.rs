use anchor_lang::prelude::*;

/// Load a program-owned record from a raw account.
///
/// Returns `Ok(None)` when the account was never initialized (still owned by the
/// system program, or empty), so callers can raise their own `NotFound` or treat
/// the record as zero.
pub fn load_record<T>(info: &AccountInfo) -> Result<Option<T>>
where
    T: AccountDeserialize + Owner,
{
    if info.owner != &T::owner() || info.data_is_empty() {
        return Ok(None);
    }

    let data = info.try_borrow_data()?;
    let mut slice: &[u8] = &data;
    T::try_deserialize(&mut slice).map(Some)
}

/// Write a record back into the account it was loaded from.
pub fn store_record<T>(info: &AccountInfo, record: &T) -> Result<()>
where
    T: AccountSerialize + Owner,
{
    require_keys_eq!(*info.owner, T::owner(), ErrorCode::AccountOwnedByWrongProgram);

    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    record.try_serialize(&mut writer)
}
